use crate::parsers::DocumentQuery;
use crate::parsers::html::{HtmlDocument, looks_like_html};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_basic() {
        let html = "<html><body><p>Hello, world!</p><a href=\"https://example.com\">Link</a></body></html>";
        let doc = HtmlDocument::parse(html);
        assert_eq!(doc.clean_text(), "Hello, world! Link");
    }

    #[test]
    fn test_clean_text_skips_non_content_elements() {
        let html = r#"<html><head><title>Title text</title><style>p { color: red; }</style></head>
            <body>
                <nav><a href="/">Home</a><a href="/about">About</a></nav>
                <header><h1>Site name</h1></header>
                <main>
                    <p>Real content here</p>
                    <script>var tracking = 1;</script>
                    <noscript>Enable JavaScript</noscript>
                    <svg><text>Icon label</text></svg>
                </main>
                <aside>Related links</aside>
                <div class="sidebar">Sidebar widget</div>
                <ul class="menu"><li>Menu entry</li></ul>
                <footer>Footer text</footer>
            </body></html>"#;
        let doc = HtmlDocument::parse(html);
        assert_eq!(doc.clean_text(), "Real content here");
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        let html = "<body><p>Line\n\tone</p>\r\n\r\n<p>  Line   two  </p></body>";
        let doc = HtmlDocument::parse(html);
        assert_eq!(doc.clean_text(), "Line one Line two");
    }

    #[test]
    fn test_clean_text_empty_body() {
        let doc = HtmlDocument::parse("<html><head></head><body></body></html>");
        assert_eq!(doc.clean_text(), "");

        // Head-only text is not body content
        let doc = HtmlDocument::parse("<html><head><title>Only a title</title></head></html>");
        assert_eq!(doc.clean_text(), "");
    }

    #[test]
    fn test_clean_text_keeps_form_text() {
        let html = r#"<body><form><label>Email address</label><input name="email"></form>
            <div class="menu">Menu entry</div></body>"#;
        let doc = HtmlDocument::parse(html);
        assert_eq!(doc.clean_text(), "Email address");
    }

    #[test]
    fn test_clean_text_malformed_html() {
        let html = "<html><body><p>Unclosed <b>bold text<div>More</body>";
        let doc = HtmlDocument::parse(html);
        assert_eq!(doc.clean_text(), "Unclosed bold text More");
    }

    #[test]
    fn test_select_all_headings() {
        let html = r#"<html><body>
            <h1>Best <em>SEO</em> Practices</h1>
            <h2>First</h2>
            <h2>   </h2>
            <h2>Second
                heading</h2>
        </body></html>"#;
        let doc = HtmlDocument::parse(html);

        assert_eq!(doc.select_all("h1").unwrap(), vec!["Best SEO Practices"]);
        assert_eq!(
            doc.select_all("h2").unwrap(),
            vec!["First", "", "Second heading"]
        );
        assert!(doc.select_all("h3").unwrap().is_empty());
    }

    #[test]
    fn test_select_one_attribute() {
        let html = r#"<html lang="en"><head>
            <link rel="canonical" href=" https://example.com/page ">
            <meta name="description" content="A page about things">
        </head><body><p>Text</p></body></html>"#;
        let doc = HtmlDocument::parse(html);

        assert_eq!(
            doc.select_one("link[rel=canonical]", "href").unwrap(),
            Some("https://example.com/page".to_string())
        );
        assert_eq!(
            doc.select_one("meta[name=description]", "content").unwrap(),
            Some("A page about things".to_string())
        );
        assert_eq!(doc.select_one("html", "lang").unwrap(), Some("en".to_string()));
        assert_eq!(doc.select_one("meta[name=keywords]", "content").unwrap(), None);
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        let doc = HtmlDocument::parse("<body><p>Text</p></body>");
        assert!(doc.select_all("h1[").is_err());
        assert!(doc.select_one("::", "href").is_err());
    }

    #[test]
    fn test_looks_like_html() {
        assert!(looks_like_html("<html><body></body></html>"));
        assert!(looks_like_html("<!DOCTYPE html>"));
        assert!(looks_like_html("some text <br/> more"));
        assert!(looks_like_html("<p class=\"x\">para</p>"));
        assert!(!looks_like_html("just plain text"));
        assert!(!looks_like_html("a < b > c"));
        assert!(!looks_like_html(""));
    }
}
