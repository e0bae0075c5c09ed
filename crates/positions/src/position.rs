use chrono::{DateTime, Utc};

use directory_core::{
    DomainError, DomainResult, Entity, EntityLifeTime, PositionId, UniquenessVerifier,
};

use crate::value_objects::{PositionDescription, PositionName};

/// Aggregate root: Position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    id: PositionId,
    name: PositionName,
    description: PositionDescription,
    lifetime: EntityLifeTime,
}

impl Position {
    /// Create a new position, rejecting names the verifier reports as taken.
    pub fn create<V>(
        name: PositionName,
        description: PositionDescription,
        is_active: bool,
        verifier: &V,
    ) -> DomainResult<Self>
    where
        V: UniquenessVerifier<Position> + ?Sized,
    {
        let candidate = Self {
            id: PositionId::new(),
            name,
            description,
            lifetime: EntityLifeTime::started(is_active),
        };

        if !verifier.check_unique(&candidate) {
            return Err(DomainError::duplicate_entity(format!(
                "position '{}' already exists",
                candidate.name
            )));
        }

        Ok(candidate)
    }

    /// Rebuild an already-validated position (e.g. loaded from storage).
    ///
    /// Skips the uniqueness check; the active flag comes from `lifetime`.
    pub fn restore(
        id: PositionId,
        name: PositionName,
        description: PositionDescription,
        lifetime: EntityLifeTime,
    ) -> Self {
        Self {
            id,
            name,
            description,
            lifetime,
        }
    }

    pub fn id_typed(&self) -> PositionId {
        self.id
    }

    pub fn name(&self) -> &PositionName {
        &self.name
    }

    pub fn description(&self) -> &PositionDescription {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.lifetime.is_active()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.lifetime.created_at()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.lifetime.updated_at()
    }

    pub fn rename(&mut self, name: PositionName) -> DomainResult<()> {
        self.ensure_active()?;
        self.name = name;
        self.lifetime = self.lifetime.touch();
        Ok(())
    }

    /// Replace name, description and active flag in one step.
    ///
    /// Passing `is_active = false` archives the position.
    pub fn update(
        &mut self,
        name: PositionName,
        description: PositionDescription,
        is_active: bool,
    ) -> DomainResult<()> {
        self.ensure_active()?;
        self.name = name;
        self.description = description;
        self.lifetime = self.lifetime.with_active(is_active).touch();
        Ok(())
    }

    pub fn archive(&mut self) -> DomainResult<()> {
        self.ensure_active()?;
        self.lifetime = self.lifetime.archive();
        Ok(())
    }

    fn ensure_active(&self) -> DomainResult<()> {
        if !self.lifetime.is_active() {
            return Err(DomainError::archived(format!("position {}", self.id)));
        }
        Ok(())
    }
}

impl Entity for Position {
    type Id = PositionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn lifetime(&self) -> &EntityLifeTime {
        &self.lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory_core::{AcceptAll, FnVerifier};

    fn name(raw: &str) -> PositionName {
        PositionName::new(raw).unwrap()
    }

    fn test_position() -> Position {
        Position::create(
            name("Engineer"),
            PositionDescription::new("Builds things").unwrap(),
            true,
            &AcceptAll,
        )
        .unwrap()
    }

    #[test]
    fn create_checks_the_verifier() {
        let verifier = FnVerifier(|p: &Position| p.name().as_str() != "Engineer");

        let err = Position::create(name("Engineer"), PositionDescription::default(), true, &verifier)
            .unwrap_err();
        match err {
            DomainError::DuplicateEntity(msg) => assert!(msg.contains("Engineer")),
            other => panic!("Expected DuplicateEntity, got {other:?}"),
        }

        let ok = Position::create(name("Analyst"), PositionDescription::default(), true, &verifier)
            .unwrap();
        assert_eq!(ok.name().as_str(), "Analyst");
    }

    #[test]
    fn create_accepts_dyn_verifier() {
        let verifier: Box<dyn UniquenessVerifier<Position>> = Box::new(AcceptAll);
        let position =
            Position::create(name("Lead"), PositionDescription::default(), false, verifier.as_ref())
                .unwrap();
        assert!(!position.is_active());
    }

    #[test]
    fn restore_bypasses_verifier_and_keeps_fields() {
        let original = test_position();
        let restored = Position::restore(
            original.id_typed(),
            original.name().clone(),
            original.description().clone(),
            *original.lifetime(),
        );
        assert_eq!(restored, original);
    }

    #[test]
    fn update_replaces_fields_and_can_archive() {
        let mut position = test_position();
        let created_at = position.created_at();

        position
            .update(name("Staff Engineer"), PositionDescription::default(), false)
            .unwrap();

        assert_eq!(position.name().as_str(), "Staff Engineer");
        assert!(position.description().is_empty());
        assert!(!position.is_active());
        assert_eq!(position.created_at(), created_at);
        assert!(position.updated_at() >= created_at);

        let err = position
            .update(name("Principal"), PositionDescription::default(), true)
            .unwrap_err();
        assert!(matches!(err, DomainError::EntityArchived(_)));
        assert_eq!(position.name().as_str(), "Staff Engineer");
    }

    #[test]
    fn rename_on_archived_position_is_rejected() {
        let mut position = test_position();
        position.archive().unwrap();

        let err = position.rename(name("Other")).unwrap_err();
        assert!(matches!(err, DomainError::EntityArchived(_)));
        assert_eq!(position.name().as_str(), "Engineer");
    }
}
