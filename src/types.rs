use serde::Serialize;

/// A single portfolio entry as shown on the projects page.
///
/// Optional fields are omitted from the serialized JSON when absent, so a
/// project without a link never shows up as `"href": ""`.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_src: Option<&'static str>,
}

impl Project {
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Project {
            title,
            description,
            href: None,
            img_src: None,
        }
    }

    pub const fn with_href(mut self, href: &'static str) -> Self {
        self.href = Some(href);
        self
    }

    pub const fn with_img_src(mut self, img_src: &'static str) -> Self {
        self.img_src = Some(img_src);
        self
    }
}
