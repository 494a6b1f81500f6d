//! End-to-end parsing of small hand-written pages.
//!
//! Each test feeds markup and a page address through `LinkParser` and checks
//! the resulting map, usually via its JSON form since key order matters.

use pagelinks_core::{parse_links, LinkMap, LinkParser};

const POST: &str = "https://ex.com/blog/post.html";
const HOME: &str = "https://ex.com/";

fn json(map: &LinkMap) -> String {
    serde_json::to_string(map).unwrap()
}

#[test]
fn image_tag_resolves_against_root() {
    let map = parse_links(r#"<img src="/logo.png">"#, POST).expect("links");
    assert_eq!(json(&map), r#"{"img":["https://ex.com/logo.png"]}"#);
}

#[test]
fn fragment_link_extends_page() {
    let map = parse_links(r##"<a href="#top">Top</a>"##, POST).expect("links");
    assert_eq!(
        json(&map),
        r##"{"extendsUrl":["https://ex.com/blog/post.html#top"]}"##
    );
}

#[test]
fn trailing_slash_variants_collapse() {
    let markup = r#"<a href="https://o.org/x/">1</a> <a href="https://o.org/x">2</a>"#;
    let map = parse_links(markup, POST).expect("links");
    assert_eq!(map.link_count(), 1);
    assert_eq!(json(&map), r#"{"other":["https://o.org/x/"]}"#);
}

#[test]
fn no_markers_is_absence() {
    assert!(parse_links("<p>plain text, no links</p>", POST).is_none());
    assert!(parse_links("", POST).is_none());
}

#[test]
fn categories_sort_with_pinned_keys_last() {
    let markup = r#"
        <html><head>
          <link rel="stylesheet" href="/css/site.css">
          <script src="/js/app.js"></script>
        </head><body>
          <img src="/img/a.png">
          <a href="/about">About</a>
          <a href="https://other.org/">Elsewhere</a>
        </body></html>
    "#;
    let map = parse_links(markup, HOME).expect("links");
    let categories: Vec<&str> = map.categories().collect();
    assert_eq!(categories, ["img", "script", "style", "extendsUrl", "other"]);
    assert_eq!(
        json(&map),
        concat!(
            r#"{"img":["https://ex.com/img/a.png"],"#,
            r#""script":["https://ex.com/js/app.js"],"#,
            r#""style":["https://ex.com/css/site.css"],"#,
            r#""extendsUrl":["https://ex.com/about"],"#,
            r#""other":["https://other.org/"]}"#
        )
    );
}

#[test]
fn mixed_extensions_nest_by_extension() {
    let markup = r#"<a href="/docs/b.txt">b</a><a href="/docs/a.pdf">a</a><a href="/docs/c.pdf">c</a>"#;
    let map = parse_links(markup, HOME).expect("links");
    let text = map.get("text").expect("text category");
    assert!(!text.is_flat());
    assert_eq!(
        json(&map),
        concat!(
            r#"{"text":{"pdf":["https://ex.com/docs/a.pdf","https://ex.com/docs/c.pdf"],"#,
            r#""txt":["https://ex.com/docs/b.txt"]}}"#
        )
    );
}

#[test]
fn script_built_link_across_literals() {
    let markup = "<script>html += \"<a href=\"+\n\"'https://github.com/jrandleman'\" + \">\";</script>";
    let map = parse_links(markup, POST).expect("links");
    assert_eq!(json(&map), r#"{"other":["https://github.com/jrandleman"]}"#);
}

#[test]
fn bare_links_in_script_and_entities() {
    let markup = concat!(
        "<script>var lib = 'http://cdn.ex.net/lib.js';</script>",
        r#"<div data-cfg="{&quot;hero&quot;:&quot;https://ex.com/hero.png&quot;}"></div>"#,
    );
    let map = parse_links(markup, POST).expect("links");
    assert_eq!(
        json(&map),
        r#"{"img":["https://ex.com/hero.png"],"script":["http://cdn.ex.net/lib.js"]}"#
    );
}

#[test]
fn attribute_and_bare_hit_of_same_link_count_once() {
    let markup = r#"<a href="https://ex.com/file.zip">zip</a>"#;
    let map = parse_links(markup, POST).expect("links");
    assert_eq!(json(&map), r#"{"compressed":["https://ex.com/file.zip"]}"#);
}

#[test]
fn noise_is_dropped() {
    let markup = r#"
        <a href="../up.html">up</a>
        <a href="/search?q=">search</a>
        <script>xhr = new XMLHttpRequest(); httpGet(u);</script>
    "#;
    assert!(parse_links(markup, POST).is_none());
}

#[test]
fn parsing_is_deterministic() {
    let markup = r#"
        <img src="/b.png"><img src="/a.png"><a href="/x.pdf">x</a>
        <a href="https://z.org/">z</a><a href="https://a.org/">a</a>
    "#;
    let parser = LinkParser::default();
    let first = parser.parse(markup, HOME).expect("links");
    for _ in 0..3 {
        assert_eq!(parser.parse(markup, HOME).as_ref(), Some(&first));
    }
    let other: Vec<&str> = first.get("other").expect("other").links().collect();
    assert_eq!(other, ["https://a.org/", "https://z.org/"]);
}

#[test]
fn one_parser_shared_across_threads() {
    let parser = LinkParser::default();
    let pages = [
        (r#"<img src="/a.png">"#, "img"),
        (r#"<script src="/a.js"></script>"#, "script"),
        (r#"<link rel="icon" href="/favicon">"#, "img"),
    ];
    std::thread::scope(|scope| {
        for (markup, category) in pages {
            let parser = &parser;
            scope.spawn(move || {
                let map = parser.parse(markup, HOME).expect("links");
                assert!(map.get(category).is_some(), "{markup}");
            });
        }
    });
}
