use chart_embed::EmbedError;
use chart_embed::markup::{Element, StaticDocument, StaticElement, select};

fn monitor_page() -> StaticDocument {
    StaticDocument::new()
        .with_element(StaticElement::new("header").with_attribute("class", "banner"))
        .with_element(
            StaticElement::new("canvas")
                .with_attribute("id", "latency")
                .with_attribute("class", "chart wide")
                .with_attribute("data-monitor", "primary"),
        )
        .with_element(
            StaticElement::new("canvas")
                .with_attribute("id", "uptime")
                .with_attribute("class", "chart"),
        )
}

#[test]
fn selects_by_id() {
    let document = monitor_page();
    let element = select(&document, "#uptime")
        .expect("valid selector")
        .expect("element present");
    assert_eq!(element.attribute("id"), Some("uptime"));
}

#[test]
fn selects_first_match_in_document_order() {
    let document = monitor_page();
    let element = select(&document, "canvas")
        .expect("valid selector")
        .expect("element present");
    assert_eq!(element.attribute("id"), Some("latency"));
}

#[test]
fn compound_selectors_require_every_token() {
    let document = monitor_page();
    let element = select(&document, "canvas#latency.chart.wide")
        .expect("valid selector")
        .expect("element present");
    assert_eq!(element.attribute("data-monitor"), Some("primary"));

    let none = select(&document, "canvas#uptime.wide").expect("valid selector");
    assert!(none.is_none());
}

#[test]
fn class_matching_splits_on_whitespace() {
    let document = monitor_page();
    let element = select(&document, ".wide")
        .expect("valid selector")
        .expect("element present");
    assert_eq!(element.attribute("id"), Some("latency"));
}

#[test]
fn missing_elements_are_not_an_error() {
    let document = monitor_page();
    let result = select(&document, "#missing").expect("valid selector");
    assert!(result.is_none());

    let empty = StaticDocument::new();
    assert!(select(&empty, "canvas").expect("valid selector").is_none());
}

#[test]
fn malformed_selectors_propagate_as_errors() {
    let document = monitor_page();
    for bad in ["", "div span", "#", "canvas.", "a[href]", "#one#two"] {
        let err = select(&document, bad).expect_err("malformed selector must fail");
        assert!(
            matches!(err, EmbedError::InvalidSelector { .. }),
            "unexpected error for `{bad}`: {err}"
        );
    }
}
