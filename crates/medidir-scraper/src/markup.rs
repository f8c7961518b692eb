//! A tolerant element index over HTML markup.
//!
//! Not a conforming HTML parser: it finds tags with regexes, pairs open and
//! close tags with a stack, and records each element's attributes and inner
//! byte range. That is enough to answer the handful of selector shapes the
//! extractor uses (`[class*=x]`, `.x`, `tag`, `[attr=v]`, `tag[class*=x]`,
//! `<ancestor> tag`) in document order.

use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<(/?)([A-Za-z][A-Za-z0-9-]*)((?:[^>"']|"[^"]*"|'[^']*')*)>"#)
        .expect("valid tag regex")
});
static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'=/<>]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("valid attr regex")
});
static OPAQUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b.*?</script\s*>|<style\b.*?</style\s*>")
        .expect("valid opaque-block regex")
});
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

#[derive(Debug, Clone)]
pub struct Element {
    /// Lowercased tag name.
    pub name: String,
    /// Attributes in source order; names lowercased, values entity-decoded.
    pub attrs: Vec<(String, String)>,
    /// Byte offset of the opening `<`.
    pub start: usize,
    /// Byte range between the open and close tags. Empty for void elements.
    pub inner: Range<usize>,
}

impl Element {
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_whitespace().any(|token| token == class))
    }

    fn class_contains(&self, needle: &str) -> bool {
        self.attr("class").is_some_and(|c| c.contains(needle))
    }
}

/// A selector shape the extractor knows how to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// `[class*="x"]`
    ClassContains(&'static str),
    /// `.x`
    Class(&'static str),
    /// `tag`
    Tag(&'static str),
    /// `[attr="value"]`
    Attr(&'static str, &'static str),
    /// `tag[class*="x"]`
    TagClassContains(&'static str, &'static str),
    /// `<ancestor> tag`
    Within(&'static Selector, &'static str),
}

impl Selector {
    fn matches(&self, el: &Element) -> bool {
        match *self {
            Selector::ClassContains(needle) => el.class_contains(needle),
            Selector::Class(class) => el.has_class(class),
            Selector::Tag(tag) => el.name == tag,
            Selector::Attr(name, value) => el.attr(name) == Some(value),
            Selector::TagClassContains(tag, needle) => {
                el.name == tag && el.class_contains(needle)
            }
            // Descendant matching needs the whole document; see `Document::select_first`.
            Selector::Within(_, tag) => el.name == tag,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::ClassContains(needle) => write!(f, "[class*=\"{needle}\"]"),
            Selector::Class(class) => write!(f, ".{class}"),
            Selector::Tag(tag) => write!(f, "{tag}"),
            Selector::Attr(name, value) => write!(f, "[{name}=\"{value}\"]"),
            Selector::TagClassContains(tag, needle) => write!(f, "{tag}[class*=\"{needle}\"]"),
            Selector::Within(ancestor, tag) => write!(f, "{ancestor} {tag}"),
        }
    }
}

/// Indexed markup. Elements are stored in document order of their open tags.
#[derive(Debug)]
pub struct Document {
    /// Source with comments, scripts and styles blanked to spaces so offsets
    /// line up with the original.
    source: String,
    elements: Vec<Element>,
}

impl Document {
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        let source = blank_opaque_blocks(markup);
        let mut elements: Vec<Element> = Vec::new();
        // Indices into `elements` of tags still open.
        let mut open: Vec<usize> = Vec::new();

        for caps in TAG_RE.captures_iter(&source) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let is_close = !caps[1].is_empty();
            let name = caps[2].to_ascii_lowercase();

            if is_close {
                // Pop to the nearest matching open tag; anything above it was
                // left unclosed and ends here too. Stray close tags are ignored.
                if let Some(depth) = open.iter().rposition(|&idx| elements[idx].name == name) {
                    for idx in open.drain(depth..) {
                        elements[idx].inner.end = whole.start();
                    }
                }
                continue;
            }

            let raw_attrs = &caps[3];
            let self_closing = raw_attrs.trim_end().ends_with('/');
            let is_void = self_closing || VOID_ELEMENTS.contains(&name.as_str());

            elements.push(Element {
                name,
                attrs: parse_attrs(raw_attrs),
                start: whole.start(),
                inner: whole.end()..whole.end(),
            });
            if !is_void {
                open.push(elements.len() - 1);
            }
        }

        let len = source.len();
        for idx in open {
            elements[idx].inner.end = len;
        }

        Self { source, elements }
    }

    /// First element in document order matching `selector`.
    #[must_use]
    pub fn select_first(&self, selector: &Selector) -> Option<&Element> {
        match selector {
            Selector::Within(ancestor, _) => self.elements.iter().find(|el| {
                selector.matches(el)
                    && self.elements.iter().any(|a| {
                        ancestor.matches(a) && a.inner.start <= el.start && el.start < a.inner.end
                    })
            }),
            _ => self.elements.iter().find(|el| selector.matches(el)),
        }
    }

    /// Text content of `el`: tags stripped, entities decoded, whitespace
    /// collapsed, trimmed.
    #[must_use]
    pub fn text(&self, el: &Element) -> String {
        let inner = &self.source[el.inner.clone()];
        let stripped = TAG_RE.replace_all(inner, "");
        let decoded = decode_entities(&stripped);
        WHITESPACE_RE.replace_all(decoded.trim(), " ").into_owned()
    }
}

fn blank_opaque_blocks(markup: &str) -> String {
    OPAQUE_RE
        .replace_all(markup, |caps: &regex::Captures<'_>| " ".repeat(caps[0].len()))
        .into_owned()
}

fn parse_attrs(raw: &str) -> Vec<(String, String)> {
    ATTR_RE
        .captures_iter(raw)
        .map(|caps| {
            let name = caps[1].to_ascii_lowercase();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map_or_else(String::new, |m| decode_entities(m.as_str()));
            (name, value)
        })
        .collect()
}

/// Decode the named entities that show up in profile text plus numeric
/// character references. Unknown entities pass through untouched.
pub(crate) fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_owned();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&tail[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let num = entity.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
#[path = "markup_test.rs"]
mod tests;
