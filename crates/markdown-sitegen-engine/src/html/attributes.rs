use super::Escaping;

/// Attribute name/value pairs in insertion order.
///
/// Rendering follows insertion order, so `href` before `target` always
/// serializes as ` href="…" target="…"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`. An existing attribute keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.0.push((name, value)),
        }
    }

    /// Builder form of [`Attributes::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Renders every attribute as ` name="value"`, or `""` when there are none.
    pub fn to_html(&self) -> String {
        self.render(Escaping::Verbatim)
    }

    pub(crate) fn render(&self, escaping: Escaping) -> String {
        self.iter().fold(String::new(), |mut out, (name, value)| {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escaping.attribute(value));
            out.push('"');
            out
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

/// Renders an optional attribute list; absent attributes render as `""`.
pub fn props_to_html(props: Option<&Attributes>) -> String {
    props.map(Attributes::to_html).unwrap_or_default()
}
