//! Property-bearing entities and delegation chains.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use itertools::Itertools;

use crate::primitive::Primitive;

/// A dynamic property bag with an explicit delegation parent.
///
/// An `Entity` directly owns a set of named members, each carrying a
/// [`Primitive`] value and an `enumerable` flag, plus an optional parent
/// entity. Member lookup via [`member`](Entity::member) consults the entity
/// itself first and then walks the parent chain;
/// [`has_own_member`](Entity::has_own_member) and
/// [`is_member_enumerable`](Entity::is_member_enumerable) never leave the
/// entity itself.
///
/// Parents are shared immutably (`Arc<Entity>`), so a chain is built
/// bottom-up: construct the ancestor, wrap it in an `Arc`, then hand it to
/// [`with_parent`](Entity::with_parent). Chain membership queries
/// ([`delegates_to`](Entity::delegates_to)) use pointer identity, not
/// structural equality.
///
/// Optionally an entity carries a canonical primitive, returned by
/// [`value_of`](Entity::value_of); without one, `value_of` falls back to the
/// entity's rendered text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    parent: Option<Arc<Entity>>,
    members: BTreeMap<String, Member>,
    primitive: Option<Primitive>,
}

#[derive(Debug, Clone, PartialEq)]
struct Member {
    value: Primitive,
    enumerable: bool,
}

impl Entity {
    /// Creates an entity with no members and no parent.
    pub fn new() -> Entity {
        Entity::default()
    }

    /// Creates an entity delegating to `parent`.
    pub fn with_parent(parent: Arc<Entity>) -> Entity {
        Entity {
            parent: Some(parent),
            ..Entity::default()
        }
    }

    /// Returns the delegation parent, if any.
    pub fn parent(&self) -> Option<&Arc<Entity>> {
        self.parent.as_ref()
    }

    /// Defines or replaces an own member, marked enumerable.
    pub fn set_member(&mut self, name: impl Into<String>, value: impl Into<Primitive>) {
        self.members.insert(
            name.into(),
            Member {
                value: value.into(),
                enumerable: true,
            },
        );
    }

    /// Defines or replaces an own member that is skipped by iteration
    /// contexts ([`enumerable_members`](Entity::enumerable_members) and the
    /// rendered text).
    pub fn set_hidden_member(&mut self, name: impl Into<String>, value: impl Into<Primitive>) {
        self.members.insert(
            name.into(),
            Member {
                value: value.into(),
                enumerable: false,
            },
        );
    }

    /// Sets the canonical primitive returned by [`value_of`](Entity::value_of).
    pub fn set_primitive(&mut self, value: impl Into<Primitive>) {
        self.primitive = Some(value.into());
    }

    /// Returns `true` iff a member of that name is defined directly on this
    /// entity, never via delegation.
    pub fn has_own_member(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Returns the own member of that name, without consulting the chain.
    pub fn own_member(&self, name: &str) -> Option<&Primitive> {
        self.members.get(name).map(|member| &member.value)
    }

    /// Looks a member up on this entity, falling back to the delegation
    /// chain on a miss.
    pub fn member(&self, name: &str) -> Option<&Primitive> {
        if let Some(member) = self.members.get(name) {
            return Some(&member.value);
        }
        self.delegation_chain()
            .find_map(|link| link.members.get(name).map(|member| &member.value))
    }

    /// Returns `true` iff the named member is both own and flagged
    /// enumerable. Inherited members report `false` regardless of their
    /// flag on the ancestor.
    pub fn is_member_enumerable(&self, name: &str) -> bool {
        self.members
            .get(name)
            .is_some_and(|member| member.enumerable)
    }

    /// Iterates the own enumerable members in name order.
    pub fn enumerable_members(&self) -> impl Iterator<Item = (&str, &Primitive)> {
        self.members
            .iter()
            .filter(|(_, member)| member.enumerable)
            .map(|(name, member)| (name.as_str(), &member.value))
    }

    /// Iterates the delegation chain from the nearest parent outward,
    /// excluding this entity itself.
    pub fn delegation_chain(&self) -> DelegationChain<'_> {
        DelegationChain {
            next: self.parent.as_ref(),
        }
    }

    /// Returns `true` iff `ancestor` appears in this entity's delegation
    /// chain.
    ///
    /// This is the inverse spelling of the classic "is prototype of" query:
    /// `ancestor.is_prototype_of(entity)` is `entity.delegates_to(&ancestor)`.
    /// Membership is decided by pointer identity.
    pub fn delegates_to(&self, ancestor: &Arc<Entity>) -> bool {
        self.delegation_chain()
            .any(|link| Arc::ptr_eq(link, ancestor))
    }

    /// Returns the canonical primitive representation: the explicitly set
    /// primitive when present, otherwise the rendered text of the entity.
    pub fn value_of(&self) -> Primitive {
        self.primitive
            .clone()
            .unwrap_or_else(|| Primitive::Text(self.to_string()))
    }
}

impl fmt::Display for Entity {
    /// The textual form of an entity: its canonical primitive when set,
    /// otherwise the enumerable own members as `{name: value, ...}`. There is
    /// no separate locale-aware form; it collapses into this rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(primitive) = &self.primitive {
            return write!(f, "{primitive}");
        }
        write!(
            f,
            "{{{}}}",
            self.enumerable_members()
                .format_with(", ", |(name, value), fmt| fmt(&format_args!(
                    "{name}: {value}"
                )))
        )
    }
}

/// Iterator over the ancestors of an entity, nearest first.
pub struct DelegationChain<'a> {
    next: Option<&'a Arc<Entity>>,
}

impl<'a> Iterator for DelegationChain<'a> {
    type Item = &'a Arc<Entity>;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next?;
        self.next = link.parent.as_ref();
        Some(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_members() {
        let mut entity = Entity::new();
        entity.set_member("a", 1i64);
        assert!(entity.has_own_member("a"));
        assert!(!entity.has_own_member("b"));
        assert_eq!(entity.own_member("a"), Some(&Primitive::Number(1.0)));
        assert_eq!(entity.own_member("b"), None);
    }

    #[test]
    fn test_own_member_never_consults_parent() {
        let mut base = Entity::new();
        base.set_member("inherited", true);
        let entity = Entity::with_parent(Arc::new(base));

        assert!(!entity.has_own_member("inherited"));
        assert_eq!(entity.own_member("inherited"), None);
        // Chain-walking lookup does find it.
        assert_eq!(entity.member("inherited"), Some(&Primitive::Bool(true)));
    }

    #[test]
    fn test_member_shadowing() {
        let mut base = Entity::new();
        base.set_member("x", "base");
        let mut entity = Entity::with_parent(Arc::new(base));
        entity.set_member("x", "own");

        assert_eq!(entity.member("x"), Some(&Primitive::from("own")));
    }

    #[test]
    fn test_enumerability() {
        let mut base = Entity::new();
        base.set_member("visible_on_base", 1i64);

        let mut entity = Entity::with_parent(Arc::new(base));
        entity.set_member("visible", 2i64);
        entity.set_hidden_member("hidden", 3i64);

        assert!(entity.is_member_enumerable("visible"));
        assert!(!entity.is_member_enumerable("hidden"));
        // Inherited members are not own, hence not enumerable here.
        assert!(!entity.is_member_enumerable("visible_on_base"));
        assert!(!entity.is_member_enumerable("missing"));

        let names: Vec<&str> = entity.enumerable_members().map(|(name, _)| name).collect();
        assert_eq!(names, &["visible"]);
    }

    #[test]
    fn test_delegation_chain() {
        let root = Arc::new(Entity::new());
        let middle = Arc::new(Entity::with_parent(root.clone()));
        let leaf = Entity::with_parent(middle.clone());

        assert!(leaf.delegates_to(&middle));
        assert!(leaf.delegates_to(&root));
        assert!(middle.delegates_to(&root));
        assert!(!root.delegates_to(&middle));
        assert_eq!(leaf.delegation_chain().count(), 2);
    }

    #[test]
    fn test_delegation_is_identity_based() {
        // Structurally equal parents are still distinct chain links.
        let parent = Arc::new(Entity::new());
        let twin = Arc::new(Entity::new());
        assert_eq!(parent, twin);

        let leaf = Entity::with_parent(parent.clone());
        assert!(leaf.delegates_to(&parent));
        assert!(!leaf.delegates_to(&twin));
        assert!(!leaf.delegates_to(&Arc::new(leaf.clone())));
    }

    #[test]
    fn test_value_of() {
        let mut entity = Entity::new();
        entity.set_member("a", 1i64);
        // No explicit primitive: falls back to the rendered text.
        assert_eq!(entity.value_of(), Primitive::Text("{a: 1}".to_string()));

        entity.set_primitive(42i64);
        assert_eq!(entity.value_of(), Primitive::Number(42.0));
    }

    #[test]
    fn test_display() {
        let mut entity = Entity::new();
        assert_eq!(entity.to_string(), "{}");

        entity.set_member("b", 2i64);
        entity.set_member("a", "x");
        entity.set_hidden_member("secret", true);
        assert_eq!(entity.to_string(), "{a: x, b: 2}");

        entity.set_primitive(1.5);
        assert_eq!(entity.to_string(), "1.5");
    }
}
