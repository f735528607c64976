//! Accept-lists deciding which bodies a collider reacts to.
//!
//! Every collider carries a [`CollisionFilter`]: an accept-list of identities
//! plus the strategy used to read the other body's identity. Two strategies
//! coexist and are chosen per collider:
//!
//! - [`FilterMode::Class`] matches the other body's declared [`BodyClass`].
//! - [`FilterMode::Tag`] matches the other body's `collision_tag`. An untagged
//!   body is matched by nothing except an accept-all filter.
//!
//! The sentinel [`ACCEPT_ALL`] means "react to everything" and never shares
//! the list with concrete entries.

/// Accept-list sentinel meaning "collide with everything".
pub const ACCEPT_ALL: &str = "BlockAll";

/// Older level files spell the sentinel this way.
const ACCEPT_ALL_ALIAS: &str = "All";

fn is_sentinel(tag: &str) -> bool {
    tag == ACCEPT_ALL || tag == ACCEPT_ALL_ALIAS
}

/// Declared kind of a body, used by class-based filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyClass {
    /// Plain level geometry with no behaviour.
    Sprite,
    /// Level geometry carrying a collision tag.
    Collider,
    DirectionalCollider,
    PhysicsEntity,
    Player,
    MovingPlatform,
    Collectible,
    Particle,
    LevelTrigger,
}

impl BodyClass {
    pub fn name(self) -> &'static str {
        match self {
            BodyClass::Sprite => "Sprite",
            BodyClass::Collider => "Collider",
            BodyClass::DirectionalCollider => "DirectionalCollider",
            BodyClass::PhysicsEntity => "PhysicsEntity",
            BodyClass::Player => "Player",
            BodyClass::MovingPlatform => "MovingPlatform",
            BodyClass::Collectible => "Collectible",
            BodyClass::Particle => "Particle",
            BodyClass::LevelTrigger => "LevelTrigger",
        }
    }
}

/// How the other body's identity is read when matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Match against the other body's [`BodyClass`] name.
    Class,
    /// Match against the other body's collision tag.
    #[default]
    Tag,
}

/// Accept-list of a collider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionFilter {
    mode: FilterMode,
    accepts: Vec<String>,
}

impl CollisionFilter {
    /// Accept-all filter using the given matching strategy.
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            accepts: vec![ACCEPT_ALL.to_string()],
        }
    }

    /// Accept-all, tag-based.
    pub fn by_tag() -> Self {
        Self::new(FilterMode::Tag)
    }

    /// Accept-all, class-based.
    pub fn by_class() -> Self {
        Self::new(FilterMode::Class)
    }

    /// Empty accept-list: reacts to nothing.
    pub fn none(mode: FilterMode) -> Self {
        Self {
            mode,
            accepts: Vec::new(),
        }
    }

    /// Builder form of [`add_tag`](Self::add_tag).
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.add_tag(tag);
        self
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Add an identity to the accept-list.
    ///
    /// Adding the sentinel resets the list to `{sentinel}`. Adding a concrete
    /// identity while the list is `{sentinel}` replaces the sentinel.
    /// Re-adding an existing identity is a no-op.
    pub fn add_tag(&mut self, tag: &str) {
        if is_sentinel(tag) {
            self.accept_all();
        } else if self.accepts_all() {
            self.accepts.clear();
            self.accepts.push(tag.to_string());
        } else if !self.accepts.iter().any(|t| t == tag) {
            self.accepts.push(tag.to_string());
        }
    }

    /// Reset the accept-list to `{sentinel}`.
    pub fn accept_all(&mut self) {
        self.accepts.clear();
        self.accepts.push(ACCEPT_ALL.to_string());
    }

    /// Remove one matching entry. Absent entries are ignored.
    pub fn remove_tag(&mut self, tag: &str) {
        let tag = if is_sentinel(tag) { ACCEPT_ALL } else { tag };
        if let Some(idx) = self.accepts.iter().position(|t| t == tag) {
            self.accepts.remove(idx);
        }
    }

    pub fn accepts_all(&self) -> bool {
        self.accepts.len() == 1 && self.accepts[0] == ACCEPT_ALL
    }

    pub fn tags(&self) -> &[String] {
        &self.accepts
    }

    /// Whether a collider with this filter reacts to a body of the given
    /// class and collision tag.
    pub fn accepts(&self, class: BodyClass, tag: &str) -> bool {
        if self.accepts_all() {
            return true;
        }
        let identity = match self.mode {
            FilterMode::Class => class.name(),
            FilterMode::Tag if tag.is_empty() => return false,
            FilterMode::Tag => tag,
        };
        self.accepts.iter().any(|t| t == identity)
    }
}

impl Default for CollisionFilter {
    fn default() -> Self {
        Self::by_tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accepts_everything() {
        let f = CollisionFilter::default();
        assert!(f.accepts_all());
        assert!(f.accepts(BodyClass::Sprite, ""));
        assert!(f.accepts(BodyClass::Player, "Player"));
    }

    #[test]
    fn adding_sentinel_twice_is_idempotent() {
        let mut f = CollisionFilter::none(FilterMode::Tag);
        f.add_tag(ACCEPT_ALL);
        f.add_tag(ACCEPT_ALL);
        assert_eq!(f.tags(), &[ACCEPT_ALL.to_string()]);
        assert!(f.accepts_all());
    }

    #[test]
    fn concrete_tag_replaces_sentinel() {
        let mut f = CollisionFilter::by_tag();
        f.add_tag("X");
        assert_eq!(f.tags(), &["X".to_string()]);
        assert!(!f.accepts_all());
    }

    #[test]
    fn sentinel_clears_concrete_tags() {
        let mut f = CollisionFilter::by_tag().with_tag("A").with_tag("B");
        assert_eq!(f.tags().len(), 2);
        f.add_tag("All");
        assert_eq!(f.tags(), &[ACCEPT_ALL.to_string()]);
    }

    #[test]
    fn duplicate_tags_are_ignored() {
        let mut f = CollisionFilter::by_tag().with_tag("A");
        f.add_tag("A");
        assert_eq!(f.tags(), &["A".to_string()]);
    }

    #[test]
    fn remove_tag_and_remove_from_empty() {
        let mut f = CollisionFilter::by_tag().with_tag("A").with_tag("B");
        f.remove_tag("A");
        assert_eq!(f.tags(), &["B".to_string()]);

        let mut empty = CollisionFilter::none(FilterMode::Tag);
        empty.remove_tag("A");
        assert!(empty.tags().is_empty());
    }

    #[test]
    fn removing_sentinel_leaves_empty_list() {
        let mut f = CollisionFilter::by_tag();
        f.remove_tag(ACCEPT_ALL);
        assert!(f.tags().is_empty());
        assert!(!f.accepts(BodyClass::Sprite, "Wall"));
    }

    #[test]
    fn tag_mode_requires_other_to_be_tagged() {
        let f = CollisionFilter::by_tag().with_tag("Wall");
        assert!(f.accepts(BodyClass::Collider, "Wall"));
        assert!(!f.accepts(BodyClass::Collider, "Floor"));
        assert!(!f.accepts(BodyClass::Sprite, ""));
    }

    #[test]
    fn class_mode_matches_declared_class() {
        let f = CollisionFilter::by_class().with_tag("Sprite");
        assert!(f.accepts(BodyClass::Sprite, ""));
        assert!(!f.accepts(BodyClass::Collider, "Sprite"));
    }

    #[test]
    fn empty_list_accepts_nothing() {
        let f = CollisionFilter::none(FilterMode::Class);
        assert!(!f.accepts(BodyClass::Player, "Player"));
    }

    #[test]
    fn mode_is_fixed_at_construction() {
        let mut f = CollisionFilter::by_class().with_tag("Sprite");
        f.add_tag(ACCEPT_ALL);
        f.remove_tag(ACCEPT_ALL);
        assert_eq!(f.mode(), FilterMode::Class);
        assert_eq!(CollisionFilter::by_tag().mode(), FilterMode::Tag);
        assert_eq!(CollisionFilter::default().mode(), FilterMode::Tag);
    }
}
