use mdhtml::{
    BlockKind, HtmlNode, ParseError, RenderError, Span, block_to_fragment, classify,
    markdown_to_document, markdown_to_html, split_blocks, text_to_spans,
};
use pretty_assertions::assert_eq;

const PAGE: &str = "# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
>
> -- J.R.R. Tolkien

## Reasons I like Tolkien

- You can spend years studying the legendarium
- It's not [a fantasy novel](https://example.com/lotr)

1. Gandalf
2. Bilbo
3. Sam

```
func main(){
    fmt.Println(\"Aiya, Ambar!\")
}
```
";

#[test]
fn full_page() {
    let blocks = split_blocks(PAGE);
    let kinds: Vec<BlockKind> = blocks.iter().map(|b| classify(b)).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Heading,
            BlockKind::Paragraph,
            BlockKind::Paragraph,
            BlockKind::Paragraph,
            BlockKind::Heading,
            BlockKind::UnorderedList,
            BlockKind::OrderedList,
            BlockKind::Code,
        ]
    );

    let html = markdown_to_html(PAGE).unwrap();
    assert!(html.starts_with("<div><h1>Tolkien Fan Club</h1>"));
    assert!(html.contains(r#"<p><img src="/images/tolkien.png" alt="JRR Tolkien sitting"></p>"#));
    assert!(html.contains("<p>Here's the deal, <b>I like Tolkien</b>.</p>"));
    assert!(html.contains(r#"<li>It's not <a href="https://example.com/lotr">a fantasy novel</a></li>"#));
    assert!(html.contains("<ol><li>Gandalf</li><li>Bilbo</li><li>Sam</li></ol>"));
    assert!(html.ends_with(
        "<pre><code>func main(){\n    fmt.Println(\"Aiya, Ambar!\")\n}\n</code></pre></div>"
    ));
}

#[test]
fn quote_block_joins_lines() {
    assert_eq!(
        markdown_to_html("> one\n> two").unwrap(),
        "<div><blockquote>onetwo</blockquote></div>"
    );
}

#[test]
fn fragment_order_matches_source_order() {
    let document = markdown_to_document("first\n\n## second\n\n- third").unwrap();
    let tags: Vec<Option<&str>> = document.children().iter().map(HtmlNode::tag).collect();
    assert_eq!(tags, vec![Some("p"), Some("h2"), Some("ul")]);
}

#[test]
fn image_and_link_in_one_line() {
    assert_eq!(
        text_to_spans("![t](u) then [t](u)").unwrap(),
        vec![
            Span::Image {
                alt: "t".into(),
                url: "u".into(),
            },
            Span::Text(" then ".into()),
            Span::Link {
                text: "t".into(),
                url: "u".into(),
            },
        ]
    );
}

#[test]
fn errors() {
    assert_eq!(
        block_to_fragment("- `open", BlockKind::UnorderedList, &Default::default()),
        Err(ParseError::UnterminatedInline { delimiter: "`" })
    );

    let empty_code = block_to_fragment("``````", BlockKind::Code, &Default::default()).unwrap();
    assert_eq!(empty_code.render(), Err(RenderError::MissingValue));
}
