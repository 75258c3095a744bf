/// What kind of element the click resolved to, after walking up to the
/// nearest anchor or button ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Anchor,
    Button,
    Other,
}

impl ElementKind {
    pub fn is_interactive(&self) -> bool {
        matches!(self, ElementKind::Anchor | ElementKind::Button)
    }
}

/// A resolved click, as reported by the embedding page layer.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    pub href: Option<String>,
    pub element: ElementKind,
    /// Whether the click landed inside the bounded projects section.
    pub in_projects: bool,
}

impl ClickTarget {
    pub fn anchor(href: &str) -> Self {
        Self {
            href: Some(href.to_string()),
            element: ElementKind::Anchor,
            in_projects: false,
        }
    }

    pub fn inside_projects(mut self) -> Self {
        self.in_projects = true;
        self
    }
}

/// Quest ids triggered by a click. The checks are independent, so a
/// single click can complete more than one quest (a repository link on
/// a project card counts as both).
pub fn classify_click(target: &ClickTarget) -> Vec<&'static str> {
    let mut triggered = Vec::new();
    let href = target.href.as_deref().unwrap_or("");

    if is_profile_link(href) {
        triggered.push("click_github");
    }
    if is_contact_link(href) {
        triggered.push("click_contact");
    }
    if target.in_projects && target.element.is_interactive() {
        triggered.push("click_project");
    }

    triggered
}

fn is_profile_link(href: &str) -> bool {
    href.contains("github.com") || href.contains("#lab")
}

fn is_contact_link(href: &str) -> bool {
    href.contains("#contact")
        || href.starts_with("mailto:")
        || href.contains("wa.me")
        || href.contains("api.whatsapp.com")
}

/// True once the offset has left the hero region.
pub fn leaves_hero(offset: f64, hero_scroll_px: f64) -> bool {
    offset > hero_scroll_px
}

/// True once the offset covers more than `deep_ratio` of the scrollable
/// range. Pages shorter than the viewport have no scrollable range and
/// never count as deep.
pub fn is_deep_scroll(offset: f64, viewport: f64, document: f64, deep_ratio: f64) -> bool {
    let scrollable = document - viewport;
    if scrollable <= 0.0 {
        return false;
    }
    offset / scrollable > deep_ratio
}

/// True when the viewport bottom is within `slack_px` of the document end.
pub fn is_near_bottom(offset: f64, viewport: f64, document: f64, slack_px: f64) -> bool {
    offset + viewport >= document - slack_px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_and_lab_links_count_as_profile() {
        assert_eq!(
            classify_click(&ClickTarget::anchor("https://github.com/someone")),
            vec!["click_github"]
        );
        assert_eq!(classify_click(&ClickTarget::anchor("#lab")), vec!["click_github"]);
    }

    #[test]
    fn contact_markers() {
        for href in ["#contact", "mailto:me@example.com", "https://wa.me/5511999999999"] {
            assert_eq!(classify_click(&ClickTarget::anchor(href)), vec!["click_contact"]);
        }
    }

    #[test]
    fn interactive_click_inside_projects() {
        let button = ClickTarget {
            href: None,
            element: ElementKind::Button,
            in_projects: true,
        };
        assert_eq!(classify_click(&button), vec!["click_project"]);

        let plain = ClickTarget {
            href: None,
            element: ElementKind::Other,
            in_projects: true,
        };
        assert!(classify_click(&plain).is_empty());
    }

    #[test]
    fn project_card_repository_link_counts_twice() {
        let target = ClickTarget::anchor("https://github.com/someone/repo").inside_projects();
        assert_eq!(classify_click(&target), vec!["click_github", "click_project"]);
    }

    #[test]
    fn unrelated_anchor_triggers_nothing() {
        assert!(classify_click(&ClickTarget::anchor("#services")).is_empty());
    }

    #[test]
    fn hero_threshold_is_exclusive() {
        assert!(!leaves_hero(150.0, 150.0));
        assert!(leaves_hero(151.0, 150.0));
    }

    #[test]
    fn deep_scroll_ratio() {
        // 2000px document, 800px viewport: scrollable range is 1200px.
        assert!(!is_deep_scroll(720.0, 800.0, 2000.0, 0.6));
        assert!(is_deep_scroll(721.0, 800.0, 2000.0, 0.6));
    }

    #[test]
    fn short_page_is_never_deep() {
        assert!(!is_deep_scroll(100.0, 800.0, 600.0, 0.6));
    }

    #[test]
    fn near_bottom_slack() {
        assert!(is_near_bottom(1100.0, 800.0, 2000.0, 100.0));
        assert!(!is_near_bottom(1099.0, 800.0, 2000.0, 100.0));
    }
}
