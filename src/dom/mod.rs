//! Privileged widget introspection
//!
//! Media widgets keep their controls in an anonymous subtree that the normal
//! public DOM does not expose. Reaching into it requires an
//! elevated-privilege introspection capability, which this module models as
//! an explicitly injected [`DomIntrospector`] rather than an ambient global.

use thiserror::Error;
use tracing::debug;

/// Index of the control surface among a video node's structural children.
///
/// Layout of a video widget's structural children: index 0 is the media
/// frame, index 1 the overlaid control surface.
pub const CONTROL_SURFACE_INDEX: usize = 1;

#[derive(Error, Debug)]
pub enum IntrospectError {
    #[error("Video node has no control surface: found {0} structural children, need at least 2")]
    ControlSurfaceMissing(usize),

    #[error("Privileged introspection denied: {0}")]
    PrivilegeDenied(String),

    #[error("DOM backend error: {0}")]
    Backend(String),
}

/// Elevated-privilege DOM capability.
///
/// Implementations wrap whatever privilege boundary the host environment
/// imposes; callers receive the capability as a parameter and never touch
/// the privilege layer directly.
pub trait DomIntrospector {
    /// Opaque node handle.
    type Node;
    /// Opaque element handle returned by attribute lookup.
    type Element;

    /// Structural children of a node, in document order.
    /// `include_anonymous` also yields implementation-internal children.
    fn structural_children(
        &self,
        node: &Self::Node,
        include_anonymous: bool,
    ) -> Result<Vec<Self::Node>, IntrospectError>;

    /// Look up an anonymous descendant of `container` carrying the given
    /// attribute name/value pair. `Ok(None)` when nothing matches.
    fn anonymous_element_by_attribute(
        &self,
        container: &Self::Node,
        name: &str,
        value: &str,
    ) -> Result<Option<Self::Element>, IntrospectError>;
}

/// Locate an internal element of a video widget by attribute.
///
/// Fetches the video node's structural children (anonymous included), takes
/// the control surface at index 1, and performs the privileged attribute
/// lookup inside it.
///
/// # Returns
/// * `Ok(Some(element))` - A matching internal element
/// * `Ok(None)` - The control surface exists but nothing matched
/// * `Err(IntrospectError)` - The widget has no control surface, or the
///   backend/privilege layer failed
pub fn anonymous_element_within_video<D: DomIntrospector>(
    dom: &D,
    video: &D::Node,
    attr_name: &str,
    attr_value: &str,
) -> Result<Option<D::Element>, IntrospectError> {
    let children = dom.structural_children(video, true)?;
    let control_surface = children
        .get(CONTROL_SURFACE_INDEX)
        .ok_or(IntrospectError::ControlSurfaceMissing(children.len()))?;

    debug!(attr_name, attr_value, "looking up anonymous element in video controls");
    dom.anonymous_element_by_attribute(control_surface, attr_name, attr_value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    /// In-memory DOM: nodes are indices, anonymous elements live in a flat
    /// attribute table keyed by (container, name, value).
    struct FakeDom {
        children: HashMap<usize, Vec<usize>>,
        anonymous: HashMap<(usize, String, String), &'static str>,
    }

    impl FakeDom {
        fn video_with_controls() -> Self {
            let mut children = HashMap::new();
            // video node 0: media frame 1, control surface 2
            children.insert(0, vec![1, 2]);
            let mut anonymous = HashMap::new();
            anonymous.insert((2, "anonid".into(), "playButton".into()), "play-button");
            Self { children, anonymous }
        }
    }

    impl DomIntrospector for FakeDom {
        type Node = usize;
        type Element = &'static str;

        fn structural_children(
            &self,
            node: &usize,
            _include_anonymous: bool,
        ) -> Result<Vec<usize>, IntrospectError> {
            Ok(self.children.get(node).cloned().unwrap_or_default())
        }

        fn anonymous_element_by_attribute(
            &self,
            container: &usize,
            name: &str,
            value: &str,
        ) -> Result<Option<&'static str>, IntrospectError> {
            Ok(self
                .anonymous
                .get(&(*container, name.to_owned(), value.to_owned()))
                .copied())
        }
    }

    #[test]
    fn finds_element_inside_control_surface() {
        let dom = FakeDom::video_with_controls();
        let found = anonymous_element_within_video(&dom, &0, "anonid", "playButton").unwrap();
        assert_eq!(found, Some("play-button"));
    }

    #[test]
    fn unmatched_attribute_is_not_found_rather_than_error() {
        let dom = FakeDom::video_with_controls();
        let found = anonymous_element_within_video(&dom, &0, "anonid", "muteButton").unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn video_without_control_surface_is_an_error() {
        let mut dom = FakeDom::video_with_controls();
        dom.children.insert(0, vec![1]);

        let err = anonymous_element_within_video(&dom, &0, "anonid", "playButton").unwrap_err();
        assert!(matches!(err, IntrospectError::ControlSurfaceMissing(1)));
    }

    #[test]
    fn lookup_happens_in_the_control_surface_not_the_video() {
        let mut dom = FakeDom::video_with_controls();
        // same attribute pair directly on the video node must not match
        dom.anonymous
            .insert((0, "anonid".into(), "scrubber".into()), "wrong-node");

        let found = anonymous_element_within_video(&dom, &0, "anonid", "scrubber").unwrap();
        assert_eq!(found, None);
    }
}
