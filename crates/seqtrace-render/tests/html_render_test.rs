use http::header::{CONTENT_TYPE, HeaderValue};
use http::{Method, StatusCode};
use rstest::rstest;
use seqtrace_core::{
    Diagram, Document, HttpRequest, HttpRequestData, HttpResponse, HttpResponseData,
    MessageRequest, MessageResponse,
};
use seqtrace_render::{DiagramTheme, Error, HtmlRenderOptions, HtmlRenderer, render_html};
use url::Url;

fn a_request() -> HttpRequest {
    let request = HttpRequestData::new(
        Method::GET,
        Url::parse("http://example.com/abcdef").unwrap(),
    )
    .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    HttpRequest::new("cli", "app", request)
}

fn a_response(status: StatusCode) -> HttpResponse {
    HttpResponse::new("app", "cli", HttpResponseData::new(status))
}

fn a_diagram() -> Diagram {
    Diagram::new()
        .add_http_request(a_request())
        .add_http_response(a_response(StatusCode::NO_CONTENT))
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn render_html_embeds_meta_json_verbatim() {
    let html = render_html(
        Document::new()
            .add_diagram(a_diagram())
            .add_meta(r#"{"a": 123}"#),
    )
    .unwrap();

    assert!(html.contains(r#"<script type="application/json" id="metaJson">{"a": 123}</script>"#));
}

#[test]
fn render_html_renders_title_and_description_once() {
    let html = render_html(
        Document::new()
            .add_title("Posts API")
            .add_description("Captured during integration tests")
            .add_diagram(a_diagram())
            .add_diagram(a_diagram()),
    )
    .unwrap();

    assert_eq!(count(&html, "<h1>Posts API</h1>"), 1);
    assert_eq!(count(&html, "Captured during integration tests"), 1);
}

#[test]
fn render_html_renders_one_panel_per_diagram() {
    let html = render_html(
        Document::new()
            .add_diagram(a_diagram().add_title("first").add_sub_title("GET /abcdef"))
            .add_diagram(a_diagram().add_title("second")),
    )
    .unwrap();

    assert_eq!(count(&html, r#"class="card mb-3""#), 2);
    assert!(html.contains(r#"id="diagram-1""#));
    assert!(html.contains(r#"id="diagram-2""#));
    let first = html.find("<strong>first</strong>").unwrap();
    let second = html.find("<strong>second</strong>").unwrap();
    assert!(first < second);
}

#[rstest]
#[case(StatusCode::OK, "badge badge-success")]
#[case(StatusCode::NOT_FOUND, "badge badge-warning")]
#[case(StatusCode::BAD_GATEWAY, "badge badge-danger")]
fn render_html_labels_panel_with_badge_and_status(
    #[case] status: StatusCode,
    #[case] class: &str,
) {
    let diagram = Diagram::new()
        .add_http_request(a_request())
        .add_http_response(a_response(status));
    let html = render_html(Document::new().add_diagram(diagram)).unwrap();

    let expected = format!(r#"<span class="{class}">{}</span>"#, status.as_u16());
    assert!(html.contains(&expected), "missing {expected}");
}

#[test]
fn render_html_renders_log_entries_in_order_and_escaped() {
    let diagram = Diagram::new()
        .add_message_request(MessageRequest::new("app", "db", "query <posts>", "SELECT *"))
        .add_message_response(MessageResponse::new("db", "app", "rows", "[1, 2]"));
    let html = render_html(Document::new().add_diagram(diagram)).unwrap();

    assert!(html.contains("query &lt;posts&gt;"));
    assert!(!html.contains("query <posts>"));
    let query = html.find("SELECT *").unwrap();
    let rows = html.find("[1, 2]").unwrap();
    assert!(query < rows);
    assert!(html.contains(r#"id="diagram-1-log-1""#));
    assert!(html.contains(r#"id="diagram-1-log-2""#));
}

#[test]
fn render_html_embeds_sequence_text() {
    let html = render_html(Document::new().add_diagram(a_diagram())).unwrap();

    assert!(html.contains(r#"data-theme="simple""#));
    assert!(html.contains("cli-&gt;app: (1) GET http:"));
    assert!(html.contains("app-&gt;&gt;cli: (2) 204"));
}

#[test]
fn render_html_fails_on_invalid_diagram() {
    let err = render_html(
        Document::new()
            .add_diagram(a_diagram())
            .add_diagram(a_diagram().add_http_request(a_request())),
    )
    .unwrap_err();

    assert!(matches!(err, Error::Model(_)), "got {err:?}");
    assert_eq!(err.to_string(), "final event should be a response type");
}

#[test]
fn render_html_fails_on_empty_diagram() {
    let err = render_html(Document::new().add_diagram(Diagram::new())).unwrap_err();
    assert_eq!(err.to_string(), "no events are defined");
}

#[test]
fn render_html_with_no_diagrams_still_renders_page() {
    let html = render_html(Document::new().add_title("empty")).unwrap();
    assert!(html.contains("<title>empty</title>"));
    assert_eq!(count(&html, r#"class="card mb-3""#), 0);
}

#[test]
fn renderer_options_control_theme_text_and_expansion() {
    let renderer = HtmlRenderer::new(HtmlRenderOptions {
        diagram_theme: DiagramTheme::Hand,
        include_diagram_text: false,
        expand_panels: true,
    })
    .unwrap();

    let html = renderer
        .render(Document::new().add_diagram(a_diagram()))
        .unwrap();

    assert!(!html.contains(r#"class="sequence-diagram""#));
    assert!(html.contains(r#"class="collapse show""#));
    assert!(html.contains(r#"aria-expanded="true""#));

    let renderer = HtmlRenderer::new(HtmlRenderOptions {
        diagram_theme: DiagramTheme::Hand,
        ..HtmlRenderOptions::default()
    })
    .unwrap();
    let html = renderer
        .render(Document::new().add_diagram(a_diagram()))
        .unwrap();
    assert!(html.contains(r#"data-theme="hand""#));
}

#[test]
fn renderer_is_reusable_across_documents() {
    let renderer = HtmlRenderer::new(HtmlRenderOptions::default()).unwrap();

    let a = renderer
        .render(Document::new().add_title("one").add_diagram(a_diagram()))
        .unwrap();
    let b = renderer
        .render(Document::new().add_title("two").add_diagram(a_diagram()))
        .unwrap();

    assert!(a.contains("<h1>one</h1>"));
    assert!(b.contains("<h1>two</h1>"));
}

#[test]
fn render_model_shows_message_diagram_without_http_status() {
    let diagram = Diagram::new()
        .add_message_request(MessageRequest::new("a", "b", "ping", ""))
        .add_message_response(MessageResponse::new("b", "a", "pong", ""));
    let model = Document::new().add_diagram(diagram).build_model().unwrap();

    let html = HtmlRenderer::new(HtmlRenderOptions::default())
        .unwrap()
        .render_model(&model)
        .unwrap();

    assert!(html.contains(r#"<span class="badge badge-success">done</span>"#));
    assert!(!html.contains(">-1<"));
}
