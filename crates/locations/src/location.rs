use chrono::{DateTime, Utc};

use directory_core::{DomainError, DomainResult, Entity, EntityLifeTime, LocationId};

use crate::value_objects::{IanaTimeZone, LocationAddress, LocationName};

/// Aggregate root: Location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    id: LocationId,
    name: LocationName,
    address: LocationAddress,
    time_zone: IanaTimeZone,
    lifetime: EntityLifeTime,
}

impl Location {
    /// Create a new, active location with a fresh id.
    pub fn create(name: LocationName, address: LocationAddress, time_zone: IanaTimeZone) -> Self {
        Self {
            id: LocationId::new(),
            name,
            address,
            time_zone,
            lifetime: EntityLifeTime::started(true),
        }
    }

    /// Rebuild a location that was validated before (e.g. loaded from storage).
    pub fn restore(
        id: LocationId,
        name: LocationName,
        address: LocationAddress,
        time_zone: IanaTimeZone,
        lifetime: EntityLifeTime,
    ) -> Self {
        Self {
            id,
            name,
            address,
            time_zone,
            lifetime,
        }
    }

    pub fn id_typed(&self) -> LocationId {
        self.id
    }

    pub fn name(&self) -> &LocationName {
        &self.name
    }

    pub fn address(&self) -> &LocationAddress {
        &self.address
    }

    pub fn time_zone(&self) -> &IanaTimeZone {
        &self.time_zone
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

    pub fn rename(&mut self, name: LocationName) -> DomainResult<()> {
        self.ensure_active()?;
        self.name = name;
        self.lifetime = self.lifetime.touch();
        Ok(())
    }

    /// Move the location to another time zone.
    pub fn retime(&mut self, time_zone: IanaTimeZone) -> DomainResult<()> {
        self.ensure_active()?;
        self.time_zone = time_zone;
        self.lifetime = self.lifetime.touch();
        Ok(())
    }

    pub fn relocate(&mut self, address: LocationAddress) -> DomainResult<()> {
        self.ensure_active()?;
        self.address = address;
        self.lifetime = self.lifetime.touch();
        Ok(())
    }

    /// Deactivate the location. Archived locations cannot be changed again.
    pub fn archive(&mut self) -> DomainResult<()> {
        self.ensure_active()?;
        self.lifetime = self.lifetime.archive();
        Ok(())
    }

    fn ensure_active(&self) -> DomainResult<()> {
        if !self.lifetime.is_active() {
            return Err(DomainError::archived(format!("location {}", self.id)));
        }
        Ok(())
    }
}

impl Entity for Location {
    type Id = LocationId;

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
    use chrono::TimeZone;

    fn test_location() -> Location {
        Location::create(
            LocationName::new("Head office").unwrap(),
            LocationAddress::new("Moscow, Tverskaya st. 1").unwrap(),
            IanaTimeZone::new("Europe/Moscow").unwrap(),
        )
    }

    fn archived_location() -> Location {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let lifetime = EntityLifeTime::new(created, created, false).unwrap();
        Location::restore(
            LocationId::new(),
            LocationName::new("Old warehouse").unwrap(),
            LocationAddress::new("Tula, Lenina 2").unwrap(),
            IanaTimeZone::new("Europe/Moscow").unwrap(),
            lifetime,
        )
    }

    #[test]
    fn create_starts_active_with_equal_timestamps() {
        let location = test_location();
        assert!(location.is_active());
        assert!(!location.is_archived());
        assert_eq!(location.created_at(), location.updated_at());
        assert_eq!(location.name().as_str(), "Head office");
    }

    #[test]
    fn rename_replaces_name_and_advances_updated_at() {
        let mut location = test_location();
        let before = location.updated_at();

        location.rename(LocationName::new("Main office").unwrap()).unwrap();

        assert_eq!(location.name().as_str(), "Main office");
        assert!(location.updated_at() >= before);
        assert_eq!(location.created_at(), before);
    }

    #[test]
    fn rename_on_archived_location_is_rejected_and_name_unchanged() {
        let mut location = archived_location();
        let err = location
            .rename(LocationName::new("New name").unwrap())
            .unwrap_err();

        match err {
            DomainError::EntityArchived(_) => {}
            other => panic!("Expected EntityArchived, got {other:?}"),
        }
        assert_eq!(location.name().as_str(), "Old warehouse");
    }

    #[test]
    fn retime_changes_time_zone() {
        let mut location = test_location();
        location.retime(IanaTimeZone::new("Asia/Yekaterinburg").unwrap()).unwrap();
        assert_eq!(location.time_zone().as_str(), "Asia/Yekaterinburg");
    }

    #[test]
    fn retime_and_relocate_respect_archived_guard() {
        let mut location = archived_location();
        assert!(matches!(
            location.retime(IanaTimeZone::utc()),
            Err(DomainError::EntityArchived(_))
        ));
        assert!(matches!(
            location.relocate(LocationAddress::new("Kazan").unwrap()),
            Err(DomainError::EntityArchived(_))
        ));
        assert_eq!(location.time_zone().as_str(), "Europe/Moscow");
        assert_eq!(location.address().value(), "Tula, Lenina 2");
    }

    #[test]
    fn archive_is_terminal() {
        let mut location = test_location();
        location.archive().unwrap();
        assert!(!location.is_active());

        let err = location.archive().unwrap_err();
        assert!(matches!(err, DomainError::EntityArchived(_)));
    }

    #[test]
    fn restore_keeps_identity_and_lifetime() {
        let location = archived_location();
        let restored = Location::restore(
            location.id_typed(),
            location.name().clone(),
            location.address().clone(),
            location.time_zone().clone(),
            *location.lifetime(),
        );
        assert_eq!(restored, location);
    }
}
