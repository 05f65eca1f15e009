//! Route table for the site's top-level views.
//!
//! DESIGN
//! ======
//! `SiteRoute` is the single source of truth for paths, navigation labels,
//! and active-link matching. Anything `resolve` does not recognize maps to
//! `NotFound`, so an unknown URL always has a view to render.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiteRoute {
    Home,
    About,
    CaseStudies,
    DocumentationSamples,
    Experience,
    Contact,
    Resume,
    NotFound,
}

/// Header navigation entries, in display order.
pub const NAV_LINKS: &[(SiteRoute, &str)] = &[
    (SiteRoute::Home, "Home"),
    (SiteRoute::About, "About"),
    (SiteRoute::CaseStudies, "Case Studies"),
    (SiteRoute::DocumentationSamples, "Samples"),
    (SiteRoute::Experience, "Experience & Skills"),
    (SiteRoute::Contact, "Contact"),
];

impl SiteRoute {
    /// Every routable view (excludes `NotFound`).
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::About,
        Self::CaseStudies,
        Self::DocumentationSamples,
        Self::Experience,
        Self::Contact,
        Self::Resume,
    ];

    /// Canonical path. `NotFound` has no path of its own.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::CaseStudies => "/case-studies",
            Self::DocumentationSamples => "/documentation-samples",
            Self::Experience => "/experience",
            Self::Contact => "/contact",
            Self::Resume => "/resume",
            Self::NotFound => "",
        }
    }

    /// Document title for the view.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Portfolio",
            Self::About => "About | Portfolio",
            Self::CaseStudies => "Case Studies | Portfolio",
            Self::DocumentationSamples => "Documentation Samples | Portfolio",
            Self::Experience => "Experience & Skills | Portfolio",
            Self::Contact => "Contact | Portfolio",
            Self::Resume => "Resume | Portfolio",
            Self::NotFound => "Page Not Found | Portfolio",
        }
    }

    /// Map a URL path to a view. Query strings, fragments, and a single
    /// trailing slash are ignored.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .unwrap_or(Self::NotFound)
    }
}

/// Whether the nav link for `link` should be highlighted at `current_path`.
#[must_use]
pub fn is_active(current_path: &str, link: SiteRoute) -> bool {
    link != SiteRoute::NotFound && SiteRoute::resolve(current_path) == link
}
