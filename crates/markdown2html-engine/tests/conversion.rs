use markdown2html_engine::{Markdown, Options, markdown_to_html};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn convert_fixture(name: &str) -> String {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    markdown_to_html(&md)
}

fn base_only() -> Markdown {
    Markdown::new(&Options {
        custom_syntax: false,
        ..Options::default()
    })
}

#[test]
fn fixture_custom_syntax() {
    insta::assert_snapshot!(convert_fixture("custom_syntax"), @r#"
    <h1>Notes</h1>
    <p>Some <b>bold</b> and <b>also bold</b> text.</p>
    <p>Hash: <p class="md5"></p>900150983cd24fb0d6963f7d28e17f72</p>
    <p>Strip: <p class="remove_c"></p>opaabana</p>
    "#);
}

#[test]
fn fixture_raw_zones() {
    insta::assert_snapshot!(convert_fixture("raw_zones"), @r#"
    <p>Inline <code>[[not hashed]]</code> code.</p>
    <pre><code class="language-text">((kept)) **as is**
    </code></pre>
    "#);
}

#[test]
fn fixture_structure() {
    insta::assert_snapshot!(convert_fixture("structure"), @r#"
    <h1>Title</h1>
    <blockquote>
    <p>quoted <b>text</b>
    more</p>
    </blockquote>
    <ol>
    <li>first</li>
    <li>second</li>
    </ol>
    <table>
    <thead>
    <tr>
    <th>a</th>
    <th style="text-align: center;">b</th>
    </tr>
    </thead>
    <tbody>
    <tr>
    <td>1</td>
    <td style="text-align: center;">2</td>
    </tr>
    </tbody>
    </table>
    <hr />
    "#);
}

#[rstest]
#[case::plain("Hello world", "<p>Hello world</p>")]
#[case::empty("", "")]
#[case::bold_asterisk("**bold**", "<p><b>bold</b></p>")]
#[case::bold_underscore("__bold__", "<p><b>bold</b></p>")]
#[case::md5(
    "[[abc]]",
    r#"<p><p class="md5"></p>900150983cd24fb0d6963f7d28e17f72</p>"#
)]
#[case::remove_c("((Copacabana))", r#"<p><p class="remove_c"></p>opaabana</p>"#)]
#[case::remove_c_nothing_to_remove("((hello))", r#"<p><p class="remove_c"></p>hello</p>"#)]
#[case::hash_inside_bold(
    "**[[abc]]**",
    r#"<p><b><p class="md5"></p>900150983cd24fb0d6963f7d28e17f72</b></p>"#
)]
#[case::unterminated("[[open and ((open and **open", "<p>[[open and ((open and **open</p>")]
#[case::fallback_keeps_indent("   indented", "<p>   indented</p>")]
#[case::escaped_text("a < b & c", "<p>a &lt; b &amp; c</p>")]
#[case::crlf("a\r\nb", "<p>a\nb</p>")]
#[case::line_break("a  \nb", "<p>a<br />\nb</p>")]
#[case::backslash_escape(r"\*not em\*", "<p>*not em*</p>")]
#[case::emphasis("*em* and _em_", "<p><em>em</em> and <em>em</em></p>")]
#[case::link(
    r#"[site](http://x.com "Home")"#,
    r#"<p><a href="http://x.com" title="Home">site</a></p>"#
)]
#[case::image("![alt](a.png)", r#"<p><img src="a.png" alt="alt" /></p>"#)]
#[case::autolink("<https://x.com>", r#"<p><a href="https://x.com">https://x.com</a></p>"#)]
#[case::heading_splits_block("a\n# H\nb", "<p>a</p>\n<h1>H</h1>\n<p>b</p>")]
#[case::hr("a\n\n---\n\nb", "<p>a</p>\n<hr />\n<p>b</p>")]
#[case::tight_list("- one\n- two", "<ul>\n<li>one</li>\n<li>two</li>\n</ul>")]
#[case::ordered_start("3. c\n4. d", "<ol start=\"3\">\n<li>c</li>\n<li>d</li>\n</ol>")]
#[case::indented_code(
    "    let x = 1;\n\n    let y = 2;",
    "<pre><code>let x = 1;\n\nlet y = 2;\n</code></pre>"
)]
fn converts(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(markdown_to_html(input), expected);
}

#[test]
fn nested_list() {
    insta::assert_snapshot!(markdown_to_html("- a\n    - b\n- c"), @r"
    <ul>
    <li>a<ul>
    <li>b</li>
    </ul>
    </li>
    <li>c</li>
    </ul>
    ");
}

#[test]
fn loose_list() {
    insta::assert_snapshot!(markdown_to_html("- a\n\n- b"), @r"
    <ul>
    <li>
    <p>a</p>
    </li>
    <li>
    <p>b</p>
    </li>
    </ul>
    ");
}

#[test]
fn heading_and_bold() {
    assert_eq!(
        markdown_to_html("# Title\n\nSome **bold** text"),
        "<h1>Title</h1>\n<p>Some <b>bold</b> text</p>"
    );
}

#[test]
fn fenced_code_keeps_blank_lines() {
    insta::assert_snapshot!(markdown_to_html("```rust\nfn main() {\n\n}\n```"), @r#"
    <pre><code class="language-rust">fn main() {

    }
    </code></pre>
    "#);
}

#[test]
fn without_custom_syntax_base_rules_apply() {
    let md = base_only();
    assert_eq!(
        md.convert("**x** and [[y]]"),
        "<p><strong>x</strong> and [[y]]</p>"
    );
    assert_eq!(md.convert("   indented"), "<p>indented</p>");
}

#[test]
fn hashing_is_deterministic() {
    let md = Markdown::default();
    assert_eq!(md.convert("[[same]]"), md.convert("[[same]]"));
}

#[test]
fn tab_length_controls_nesting() {
    let md = Markdown::new(&Options {
        tab_length: 2,
        ..Options::default()
    });
    assert_eq!(
        md.convert("- a\n  - b"),
        "<ul>\n<li>a<ul>\n<li>b</li>\n</ul>\n</li>\n</ul>"
    );
}
