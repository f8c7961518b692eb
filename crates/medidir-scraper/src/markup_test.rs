use super::*;

#[test]
fn text_strips_nested_tags_and_collapses_whitespace() {
    let doc = Document::parse("<div class=\"bio\">\n  Heart <b>and</b>\n  lungs </div>");
    let el = doc.select_first(&Selector::Class("bio")).unwrap();
    assert_eq!(doc.text(el), "Heart and lungs");
}

#[test]
fn class_token_does_not_match_substring() {
    let doc = Document::parse(r#"<p class="doctor-summary-box">x</p>"#);
    assert!(doc.select_first(&Selector::Class("summary")).is_none());
    assert!(doc
        .select_first(&Selector::ClassContains("summary"))
        .is_some());
}

#[test]
fn class_token_matches_among_several() {
    let doc = Document::parse(r#"<p class="card summary wide">x</p>"#);
    assert!(doc.select_first(&Selector::Class("summary")).is_some());
}

#[test]
fn select_first_returns_document_order() {
    let doc = Document::parse(
        r#"<span class="name-a">first</span><span class="name-b">second</span>"#,
    );
    let el = doc.select_first(&Selector::ClassContains("name")).unwrap();
    assert_eq!(doc.text(el), "first");
}

#[test]
fn tag_names_are_case_insensitive() {
    let doc = Document::parse("<H1>Title</H1>");
    let el = doc.select_first(&Selector::Tag("h1")).unwrap();
    assert_eq!(doc.text(el), "Title");
}

#[test]
fn attribute_selector_matches_exact_value() {
    let doc = Document::parse(
        r#"<span itemprop="names">no</span><span itemprop='name'>yes</span>"#,
    );
    let el = doc.select_first(&Selector::Attr("itemprop", "name")).unwrap();
    assert_eq!(doc.text(el), "yes");
}

#[test]
fn unquoted_attribute_values_parse() {
    let doc = Document::parse("<img class=avatar src=/a/b.png>");
    let el = doc.select_first(&Selector::Tag("img")).unwrap();
    assert_eq!(el.attr("src"), Some("/a/b.png"));
    assert_eq!(el.attr("class"), Some("avatar"));
}

#[test]
fn descendant_selector_requires_ancestor() {
    static PROFILE: Selector = Selector::Class("doctor-profile");
    let sel = Selector::Within(&PROFILE, "img");
    let doc = Document::parse(
        r#"<img src="/logo.png"><div class="doctor-profile"><p><img src="/me.jpg"></p></div>"#,
    );
    let el = doc.select_first(&sel).unwrap();
    assert_eq!(el.attr("src"), Some("/me.jpg"));
}

#[test]
fn descendant_selector_ignores_siblings_after_close() {
    static PROFILE: Selector = Selector::Class("doctor-profile");
    let sel = Selector::Within(&PROFILE, "img");
    let doc = Document::parse(r#"<div class="doctor-profile"></div><img src="/outside.png">"#);
    assert!(doc.select_first(&sel).is_none());
}

#[test]
fn tag_with_class_selector() {
    let doc = Document::parse(
        r#"<div class="profile"><span>x</span></div><img class="profile-pic" src="/p.jpg">"#,
    );
    let el = doc
        .select_first(&Selector::TagClassContains("img", "profile"))
        .unwrap();
    assert_eq!(el.attr("src"), Some("/p.jpg"));
}

#[test]
fn unclosed_elements_run_to_parent_close() {
    let doc = Document::parse(r#"<div class="outer"><p class="para">one<p>two</div>tail"#);
    let para = doc.select_first(&Selector::Class("para")).unwrap();
    assert_eq!(doc.text(para), "onetwo");
    let outer = doc.select_first(&Selector::Class("outer")).unwrap();
    assert_eq!(doc.text(outer), "onetwo");
}

#[test]
fn unclosed_element_at_end_runs_to_end() {
    let doc = Document::parse(r#"<div class="bio">runs on"#);
    let el = doc.select_first(&Selector::Class("bio")).unwrap();
    assert_eq!(doc.text(el), "runs on");
}

#[test]
fn scripts_styles_and_comments_are_ignored() {
    let doc = Document::parse(
        r#"<script>var s = '<h1 class="x">fake</h1>';</script><!-- <h1>also fake</h1> --><style>h1{}</style><h1>Real</h1>"#,
    );
    let el = doc.select_first(&Selector::Tag("h1")).unwrap();
    assert_eq!(doc.text(el), "Real");
    assert_eq!(doc.elements.len(), 1);
}

#[test]
fn quoted_gt_inside_attribute_does_not_end_tag() {
    let doc = Document::parse(r#"<div title="a > b" class="bio">text</div>"#);
    let el = doc.select_first(&Selector::Class("bio")).unwrap();
    assert_eq!(doc.text(el), "text");
}

#[test]
fn entities_are_decoded_in_text_and_attributes() {
    let doc = Document::parse(
        r#"<p class="q">MBBS &amp; MD&nbsp;&#40;Cardio&#x29; &bogus;</p><img src="/a.png?x=1&amp;y=2">"#,
    );
    let p = doc.select_first(&Selector::Class("q")).unwrap();
    assert_eq!(doc.text(p), "MBBS & MD (Cardio) &bogus;");
    let img = doc.select_first(&Selector::Tag("img")).unwrap();
    assert_eq!(img.attr("src"), Some("/a.png?x=1&y=2"));
}

#[test]
fn self_closing_tags_have_no_content() {
    let doc = Document::parse(r#"<span class="a"/><span class="b">b</span>"#);
    let a = doc.select_first(&Selector::Class("a")).unwrap();
    assert_eq!(doc.text(a), "");
}

#[test]
fn selector_display_uses_css_syntax() {
    static PROFILE: Selector = Selector::ClassContains("doctor-profile");
    assert_eq!(
        Selector::ClassContains("name").to_string(),
        "[class*=\"name\"]"
    );
    assert_eq!(Selector::Class("summary").to_string(), ".summary");
    assert_eq!(
        Selector::Attr("itemprop", "name").to_string(),
        "[itemprop=\"name\"]"
    );
    assert_eq!(
        Selector::Within(&PROFILE, "img").to_string(),
        "[class*=\"doctor-profile\"] img"
    );
    assert_eq!(
        Selector::TagClassContains("img", "doctor").to_string(),
        "img[class*=\"doctor\"]"
    );
}
