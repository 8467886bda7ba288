//! Scroll-position classification and the section style mapping.
//!
//! The landing page maps the continuous scroll offset to one of four
//! sections. Classification and the shown/hidden style values are pure
//! functions here; the DOM mutation lives with the page that owns the
//! scroll listener.

/// The four named scroll regions of the landing page, in menu order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Home,
    AboutMe,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::AboutMe,
        Section::Projects,
        Section::Contact,
    ];

    /// Stable DOM id of the section's anchor element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::AboutMe => "about-me",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Menu label: capitalised id with the first hyphen turned into a
    /// space ("about-me" -> "About me").
    pub fn label(self) -> String {
        let id = self.id();
        let mut label = String::with_capacity(id.len());
        let mut chars = id.chars();
        if let Some(first) = chars.next() {
            label.extend(first.to_uppercase());
        }
        label.push_str(chars.as_str());
        label.replacen('-', " ", 1)
    }
}

/// `offset_top` of the three anchor elements; a missing anchor reads as 0.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct SectionOffsets {
    pub about_me: f64,
    pub projects: f64,
    pub contact: f64,
}

/// First matching band wins. `None` means the offset fell in a gap between
/// bands; the caller leaves the previous state untouched in that case.
pub fn classify(scroll_y: f64, offsets: &SectionOffsets) -> Option<Section> {
    if scroll_y < offsets.about_me - 500.0 {
        Some(Section::Home)
    } else if scroll_y >= offsets.about_me - 100.0 && scroll_y < offsets.about_me + 500.0 {
        Some(Section::AboutMe)
    } else if scroll_y >= offsets.projects - 100.0 && scroll_y < offsets.projects + 500.0 {
        Some(Section::Projects)
    } else if scroll_y >= offsets.contact - 100.0 && scroll_y < offsets.contact + 500.0 {
        Some(Section::Contact)
    } else {
        None
    }
}

/// Opacity plus translate distance for one sliding block.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SlideStyle {
    pub opacity: f64,
    pub shift: f64,
}

const SHOWN: SlideStyle = SlideStyle {
    opacity: 1.0,
    shift: 0.0,
};

/// About-me and contact slide in horizontally from 500px out.
pub fn about_me_style(visible: bool) -> SlideStyle {
    if visible {
        SHOWN
    } else {
        SlideStyle {
            opacity: 0.0,
            shift: 500.0,
        }
    }
}

/// The projects block rises from 1000px below.
pub fn projects_style(visible: bool) -> SlideStyle {
    if visible {
        SHOWN
    } else {
        SlideStyle {
            opacity: 0.0,
            shift: -1000.0,
        }
    }
}

pub fn contact_style(visible: bool) -> SlideStyle {
    about_me_style(visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFSETS: SectionOffsets = SectionOffsets {
        about_me: 900.0,
        projects: 1900.0,
        contact: 2900.0,
    };

    #[test]
    fn everything_below_the_about_band_is_home() {
        for y in [0.0, 150.0, 399.0] {
            assert_eq!(classify(y, &OFFSETS), Some(Section::Home));
        }
        assert_eq!(classify(400.0, &OFFSETS), None);
    }

    #[test]
    fn about_band_is_half_open() {
        assert_eq!(classify(800.0, &OFFSETS), Some(Section::AboutMe));
        assert_eq!(classify(1399.9, &OFFSETS), Some(Section::AboutMe));
        assert_eq!(classify(799.9, &OFFSETS), None);
    }

    #[test]
    fn contact_band_is_half_open_and_contact_shows() {
        assert_eq!(classify(2800.0, &OFFSETS), Some(Section::Contact));
        assert_eq!(classify(3399.9, &OFFSETS), Some(Section::Contact));
        assert_eq!(classify(3400.0, &OFFSETS), None);
        assert_eq!(contact_style(true).opacity, 1.0);
    }

    #[test]
    fn gaps_between_bands_classify_as_none() {
        // Between home's cutoff and the about band.
        assert_eq!(classify(600.0, &OFFSETS), None);
        // Between the about and projects bands.
        assert_eq!(classify(1500.0, &OFFSETS), None);
    }

    #[test]
    fn earlier_bands_win_when_offsets_overlap() {
        let squeezed = SectionOffsets {
            about_me: 600.0,
            projects: 800.0,
            contact: 1000.0,
        };
        // 900 is inside both the about-me and projects bands.
        assert_eq!(classify(900.0, &squeezed), Some(Section::AboutMe));
    }

    #[test]
    fn hidden_styles_carry_the_slide_distances() {
        assert_eq!(about_me_style(false).shift, 500.0);
        assert_eq!(projects_style(false).shift, -1000.0);
        assert_eq!(projects_style(true), SHOWN);
    }

    #[test]
    fn labels_come_from_the_ids() {
        assert_eq!(Section::Home.label(), "Home");
        assert_eq!(Section::AboutMe.label(), "About me");
        assert_eq!(Section::Projects.label(), "Projects");
        assert_eq!(Section::Contact.label(), "Contact");
    }
}
