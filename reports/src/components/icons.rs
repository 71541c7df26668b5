//! Inline SVG icons (Phosphor Icons, Regular weight).

use leptos::prelude::*;

/// The handful of glyphs the report uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportIcon {
    /// Report header (SquaresFour)
    Overview,
    /// Load failure (WarningCircle)
    Warning,
    /// Expand all (CaretDown)
    Expand,
    /// Collapse all (CaretUp)
    Collapse,
}

impl ReportIcon {
    /// SVG path data on a 256x256 view box.
    pub fn path(self) -> &'static str {
        match self {
            ReportIcon::Overview => {
                "M104,48H48A16,16,0,0,0,32,64v56a16,16,0,0,0,16,16h56a16,16,0,0,0,16-16V64A16,16,0,0,0,104,48Zm0,72H48V64h56Zm104-72H152a16,16,0,0,0-16,16v56a16,16,0,0,0,16,16h56a16,16,0,0,0,16-16V64A16,16,0,0,0,208,48Zm0,72H152V64h56ZM104,152H48a16,16,0,0,0-16,16v56a16,16,0,0,0,16,16h56a16,16,0,0,0,16-16V168A16,16,0,0,0,104,152Zm0,72H48V168h56Zm104-72H152a16,16,0,0,0-16,16v56a16,16,0,0,0,16,16h56a16,16,0,0,0,16-16V168A16,16,0,0,0,208,152Zm0,72H152V168h56Z"
            }
            ReportIcon::Warning => {
                "M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24Zm0,192a88,88,0,1,1,88-88A88.1,88.1,0,0,1,128,216Zm-8-80V80a8,8,0,0,1,16,0v56a8,8,0,0,1-16,0Zm8,40a12,12,0,1,1,12-12A12,12,0,0,1,128,176Z"
            }
            ReportIcon::Expand => {
                "M213.66,101.66l-80,80a8,8,0,0,1-11.32,0l-80-80A8,8,0,0,1,53.66,90.34L128,164.69l74.34-74.35a8,8,0,0,1,11.32,11.32Z"
            }
            ReportIcon::Collapse => {
                "M213.66,165.66a8,8,0,0,1-11.32,0L128,91.31,53.66,165.66a8,8,0,0,1-11.32-11.32l80-80a8,8,0,0,1,11.32,0l80,80A8,8,0,0,1,213.66,165.66Z"
            }
        }
    }
}

/// Decorative inline icon; hidden from screen readers.
#[component]
pub fn Icon(
    /// Which glyph to draw
    icon: ReportIcon,
    /// Edge length in pixels
    #[prop(default = 16)]
    size: u16,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 256 256"
            fill="currentColor"
            class="icon"
            aria-hidden="true"
        >
            <path d=icon.path()></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_decorative_svg() {
        let html = view! { <Icon icon=ReportIcon::Warning size=20 /> }.to_html();
        assert!(html.contains("<svg"));
        assert!(html.contains("width=\"20\""));
        assert!(html.contains("aria-hidden=\"true\""));
        assert!(html.contains(ReportIcon::Warning.path()));
    }
}
