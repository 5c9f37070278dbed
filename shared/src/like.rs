//! ==============================================================================
//! like.rs - like/unlike toggle view model
//! ==============================================================================
//!
//! the like counter is a view of server state kept only in the page. the
//! backend answers like/unlike without a count, so the next count is the
//! rendered one plus or minus one once the request succeeds.
//!
//! dom contract:
//!     <div data-publicacao-id="42">
//!         <i class="curtir-publicacao">...</i><span>5</span>
//!     </div>
//!
//! ==============================================================================

use crate::endpoints::{Endpoint, PostId};
use crate::error::ClientError;

pub const LIKE_CLASS: &str = "curtir-publicacao";
pub const UNLIKE_CLASS: &str = "descurtir-publicacao";
pub const HIGHLIGHT_CLASS: &str = "text-danger";

/// The action a like trigger currently offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeRole {
    /// post not liked yet, clicking likes it
    Like,
    /// post already liked, clicking removes the like
    Unlike,
}

impl LikeRole {
    pub fn swapped(self) -> Self {
        match self {
            LikeRole::Like => LikeRole::Unlike,
            LikeRole::Unlike => LikeRole::Like,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            LikeRole::Like => LIKE_CLASS,
            LikeRole::Unlike => UNLIKE_CLASS,
        }
    }

    /// Reads the role back from the trigger's class list.
    pub fn from_classes<'a>(mut classes: impl Iterator<Item = &'a str>) -> Option<Self> {
        classes.find_map(|class| match class {
            LIKE_CLASS => Some(LikeRole::Like),
            UNLIKE_CLASS => Some(LikeRole::Unlike),
            _ => None,
        })
    }
}

/// State of one post's like trigger and counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeButton {
    pub post_id: PostId,
    pub count: i64,
    pub role: LikeRole,
}

/// What the dom should show for a [`LikeButton`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeView {
    pub counter_text: String,
    pub trigger_class: &'static str,
    pub stale_class: &'static str,
    pub highlighted: bool,
}

impl LikeButton {
    pub fn new(post_id: PostId, counter_text: &str, role: LikeRole) -> Self {
        Self {
            post_id,
            count: parse_count(counter_text),
            role,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self.role {
            LikeRole::Like => Endpoint::LikePost(self.post_id.clone()),
            LikeRole::Unlike => Endpoint::UnlikePost(self.post_id.clone()),
        }
    }

    /// Next state once the request for the current role has settled.
    /// A failed request leaves everything as it was.
    pub fn settle(&self, outcome: &Result<(), ClientError>) -> Self {
        if outcome.is_err() {
            return self.clone();
        }

        let count = match self.role {
            LikeRole::Like => self.count.saturating_add(1),
            LikeRole::Unlike => self.count.saturating_sub(1),
        };
        Self {
            post_id: self.post_id.clone(),
            count,
            role: self.role.swapped(),
        }
    }

    pub fn render(&self) -> LikeView {
        LikeView {
            counter_text: self.count.to_string(),
            trigger_class: self.role.class(),
            stale_class: self.role.swapped().class(),
            highlighted: self.role == LikeRole::Unlike,
        }
    }
}

/// Integer prefix of the counter text, `parseInt` style. Text without
/// leading digits counts as zero; counts beyond `i64` saturate.
pub fn parse_count(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    if negative {
        magnitude.saturating_neg()
    } else {
        magnitude
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn button(count: &str, role: LikeRole) -> LikeButton {
        LikeButton::new(PostId::from("42"), count, role)
    }

    #[test]
    fn test_like_success_increments_and_swaps() {
        let next = button("5", LikeRole::Like).settle(&Ok(()));
        assert_eq!(next.count, 6);
        assert_eq!(next.role, LikeRole::Unlike);

        let view = next.render();
        assert_eq!(view.counter_text, "6");
        assert_eq!(view.trigger_class, UNLIKE_CLASS);
        assert_eq!(view.stale_class, LIKE_CLASS);
        assert!(view.highlighted);
    }

    #[test]
    fn test_unlike_success_decrements_and_swaps() {
        let next = button("6", LikeRole::Unlike).settle(&Ok(()));
        assert_eq!(next.count, 5);
        assert_eq!(next.role, LikeRole::Like);
        assert!(!next.render().highlighted);
    }

    #[test]
    fn test_failure_keeps_state() {
        let current = button("5", LikeRole::Like);
        let next = current.settle(&Err(ClientError::Status { status: 500, detail: None }));
        assert_eq!(next, current);
        assert_eq!(next.render().counter_text, "5");
    }

    #[test]
    fn test_endpoint_follows_role() {
        assert_eq!(
            button("0", LikeRole::Like).endpoint(),
            Endpoint::LikePost(PostId::from("42"))
        );
        assert_eq!(
            button("0", LikeRole::Unlike).endpoint(),
            Endpoint::UnlikePost(PostId::from("42"))
        );
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("5"), 5);
        assert_eq!(parse_count("  12 curtidas"), 12);
        assert_eq!(parse_count("-1"), -1);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("abc"), 0);
    }

    #[test]
    fn test_counter_at_the_edges_saturates() {
        let max = button("9223372036854775807", LikeRole::Like);
        assert_eq!(max.count, i64::MAX);
        let next = max.settle(&Ok(()));
        assert_eq!(next.count, i64::MAX);
        assert_eq!(next.role, LikeRole::Unlike);

        let min = LikeButton {
            post_id: PostId::from("42"),
            count: i64::MIN,
            role: LikeRole::Unlike,
        };
        assert_eq!(min.settle(&Ok(())).count, i64::MIN);
    }

    #[test]
    fn test_parse_count_saturates_oversized_counters() {
        assert_eq!(parse_count("99999999999999999999"), i64::MAX);
        assert_eq!(parse_count("-99999999999999999999"), -i64::MAX);
        assert_eq!(parse_count("007"), 7);
    }

    #[test]
    fn test_role_from_classes() {
        let classes = ["fas", "fa-heart", "descurtir-publicacao", "text-danger"];
        assert_eq!(LikeRole::from_classes(classes.into_iter()), Some(LikeRole::Unlike));
        assert_eq!(LikeRole::from_classes(["btn"].into_iter()), None);
    }
}
