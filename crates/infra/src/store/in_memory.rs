use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use directory_core::{DepartmentId, LocationId, PositionId, UniquenessVerifier};
use directory_departments::Department;
use directory_locations::Location;
use directory_positions::Position;

use super::r#trait::{DirectoryStore, StoreError};

/// In-memory directory store.
///
/// Intended for tests/dev. Each table sits behind its own `RwLock`; inserts
/// check constraints and write under the same write guard, so concurrent
/// inserts of the same key cannot both succeed.
#[derive(Debug, Default)]
pub struct InMemoryDirectoryStore {
    departments: RwLock<HashMap<DepartmentId, Department>>,
    positions: RwLock<HashMap<PositionId, Arc<Position>>>,
    locations: RwLock<HashMap<LocationId, Arc<Location>>>,
}

impl InMemoryDirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn scope_of(department: &Department) -> String {
    match department.parent_id() {
        Some(parent) => format!("under department {parent}"),
        None => "among root departments".to_owned(),
    }
}

/// Describe why `candidate` may not coexist with `existing`, if it may not.
fn department_conflict(existing: &Department, candidate: &Department) -> Option<String> {
    if existing.id_typed() == candidate.id_typed() {
        return None;
    }
    if existing.parent_id() == candidate.parent_id() {
        if same_name(existing.name().as_str(), candidate.name().as_str()) {
            return Some(format!(
                "department name '{}' {}",
                candidate.name(),
                scope_of(candidate)
            ));
        }
        if existing.identifier() == candidate.identifier() {
            return Some(format!(
                "department identifier '{}' {}",
                candidate.identifier(),
                scope_of(candidate)
            ));
        }
    }
    if !candidate.path().is_root() && existing.path() == candidate.path() {
        return Some(format!("department path '{}'", candidate.path()));
    }
    None
}

fn find_department_conflict<'a>(
    table: impl IntoIterator<Item = &'a Department>,
    candidate: &Department,
) -> Option<String> {
    table
        .into_iter()
        .find_map(|existing| department_conflict(existing, candidate))
}

fn find_position_conflict<'a>(
    table: impl IntoIterator<Item = &'a Arc<Position>>,
    candidate: &Position,
) -> Option<String> {
    table.into_iter().find_map(|existing| {
        (existing.id_typed() != candidate.id_typed()
            && same_name(existing.name().as_str(), candidate.name().as_str()))
        .then(|| format!("position name '{}'", candidate.name()))
    })
}

impl DirectoryStore for InMemoryDirectoryStore {
    fn insert_department(&self, department: Department) -> Result<(), StoreError> {
        let mut table = self.departments.write().map_err(|_| StoreError::Poisoned)?;

        let id = department.id_typed();
        if table.contains_key(&id) {
            return Err(StoreError::UniqueViolation(format!("department id {id}")));
        }
        if let Some(key) = find_department_conflict(table.values(), &department) {
            warn!(department_id = %id, conflict = %key, "department insert rejected");
            return Err(StoreError::UniqueViolation(key));
        }

        debug!(
            department_id = %id,
            path = %department.path(),
            depth = %department.depth(),
            "department stored"
        );
        table.insert(id, department);
        Ok(())
    }

    fn replace_department(&self, department: Department) -> Result<(), StoreError> {
        let mut table = self.departments.write().map_err(|_| StoreError::Poisoned)?;

        let id = department.id_typed();
        if !table.contains_key(&id) {
            return Err(StoreError::NotFound(format!("department {id}")));
        }
        if let Some(key) = find_department_conflict(table.values(), &department) {
            warn!(department_id = %id, conflict = %key, "department update rejected");
            return Err(StoreError::UniqueViolation(key));
        }

        debug!(department_id = %id, "department replaced");
        table.insert(id, department);
        Ok(())
    }

    fn department(&self, id: DepartmentId) -> Result<Option<Department>, StoreError> {
        let table = self.departments.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.get(&id).cloned())
    }

    fn departments(&self) -> Result<Vec<Department>, StoreError> {
        let table = self.departments.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.values().cloned().collect())
    }

    fn insert_position(&self, position: Arc<Position>) -> Result<(), StoreError> {
        let mut table = self.positions.write().map_err(|_| StoreError::Poisoned)?;

        let id = position.id_typed();
        if table.contains_key(&id) {
            return Err(StoreError::UniqueViolation(format!("position id {id}")));
        }
        if let Some(key) = find_position_conflict(table.values(), &position) {
            warn!(position_id = %id, conflict = %key, "position insert rejected");
            return Err(StoreError::UniqueViolation(key));
        }

        debug!(position_id = %id, name = %position.name(), "position stored");
        table.insert(id, position);
        Ok(())
    }

    fn position(&self, id: PositionId) -> Result<Option<Arc<Position>>, StoreError> {
        let table = self.positions.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.get(&id).cloned())
    }

    fn insert_location(&self, location: Arc<Location>) -> Result<(), StoreError> {
        let mut table = self.locations.write().map_err(|_| StoreError::Poisoned)?;

        let id = location.id_typed();
        if table.contains_key(&id) {
            return Err(StoreError::UniqueViolation(format!("location id {id}")));
        }

        debug!(location_id = %id, time_zone = %location.time_zone(), "location stored");
        table.insert(id, location);
        Ok(())
    }

    fn location(&self, id: LocationId) -> Result<Option<Arc<Location>>, StoreError> {
        let table = self.locations.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.get(&id).cloned())
    }
}

// A poisoned table answers "unique": the check is advisory and the following
// insert reports the poisoning as an error.

impl UniquenessVerifier<Department> for InMemoryDirectoryStore {
    fn check_unique(&self, candidate: &Department) -> bool {
        match self.departments.read() {
            Ok(table) => find_department_conflict(table.values(), candidate).is_none(),
            Err(_) => {
                warn!("department table poisoned during uniqueness check");
                true
            }
        }
    }
}

impl UniquenessVerifier<Position> for InMemoryDirectoryStore {
    fn check_unique(&self, candidate: &Position) -> bool {
        match self.positions.read() {
            Ok(table) => find_position_conflict(table.values(), candidate).is_none(),
            Err(_) => {
                warn!("position table poisoned during uniqueness check");
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory_core::{DomainError, EntityLifeTime};
    use directory_departments::{DepartmentIdentifier, DepartmentName};
    use directory_locations::{IanaTimeZone, LocationAddress, LocationName};
    use directory_positions::{PositionDescription, PositionName};

    fn root(name: &str, slug: &str) -> Department {
        Department::create_root(
            DepartmentName::new(name).unwrap(),
            DepartmentIdentifier::new(slug).unwrap(),
            true,
            None,
        )
        .unwrap()
    }

    fn child(parent: &Department, name: &str, slug: &str) -> Department {
        Department::create_child(
            DepartmentName::new(name).unwrap(),
            DepartmentIdentifier::new(slug).unwrap(),
            Some(parent),
            true,
            None,
        )
        .unwrap()
    }

    fn position(name: &str) -> Arc<Position> {
        Arc::new(Position::restore(
            PositionId::new(),
            PositionName::new(name).unwrap(),
            PositionDescription::default(),
            EntityLifeTime::started(true),
        ))
    }

    #[test]
    fn insert_then_get_department() {
        let store = InMemoryDirectoryStore::new();
        let hq = root("HQ", "hq");
        store.insert_department(hq.clone()).unwrap();

        assert_eq!(store.department(hq.id_typed()).unwrap(), Some(hq));
        assert_eq!(store.departments().unwrap().len(), 1);
        assert_eq!(store.department(DepartmentId::new()).unwrap(), None);
    }

    #[test]
    fn root_names_collide_case_insensitively() {
        let store = InMemoryDirectoryStore::new();
        store.insert_department(root("Sales", "sales")).unwrap();

        let candidate = root("SALES", "sales-2");
        assert!(!store.check_unique(&candidate));

        let err = store.insert_department(candidate).unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation(ref key) if key.contains("name")));
    }

    #[test]
    fn sibling_identifiers_collide_but_cousins_do_not() {
        let store = InMemoryDirectoryStore::new();
        let hq = root("HQ", "hq");
        let it = child(&hq, "IT", "it");
        store.insert_department(hq.clone()).unwrap();
        store.insert_department(it.clone()).unwrap();

        let same_slug = child(&hq, "Information", "it");
        assert!(!store.check_unique(&same_slug));

        let nested = child(&it, "Dev", "dev");
        let other_branch = child(&hq, "Ops", "ops");
        let cousin = child(&other_branch, "Dev", "dev");
        assert!(store.check_unique(&nested));
        store.insert_department(nested).unwrap();
        store.insert_department(other_branch).unwrap();
        store.insert_department(cousin).unwrap();
    }

    #[test]
    fn non_root_paths_are_unique_across_roots() {
        let store = InMemoryDirectoryStore::new();
        let first = root("First", "root");
        let second = root("Second", "root-2");
        store.insert_department(first.clone()).unwrap();
        store.insert_department(second.clone()).unwrap();
        store.insert_department(child(&first, "IT", "it")).unwrap();

        let err = store
            .insert_department(child(&second, "IT", "it"))
            .unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation(ref key) if key.contains("path")));
    }

    #[test]
    fn replace_requires_existing_record() {
        let store = InMemoryDirectoryStore::new();
        let hq = root("HQ", "hq");

        let err = store.replace_department(hq.clone()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));

        store.insert_department(hq.clone()).unwrap();
        store.replace_department(hq).unwrap();
    }

    #[test]
    fn duplicate_position_names_are_rejected() {
        let store = InMemoryDirectoryStore::new();
        store.insert_position(position("Engineer")).unwrap();

        let dup = position("engineer");
        assert!(!store.check_unique(&*dup));
        assert!(matches!(
            store.insert_position(dup),
            Err(StoreError::UniqueViolation(_))
        ));
    }

    #[test]
    fn locations_are_keyed_by_id() {
        let store = InMemoryDirectoryStore::new();
        let location = Arc::new(Location::create(
            LocationName::new("Depot").unwrap(),
            LocationAddress::new("Oslo, Karl Johans gate 1").unwrap(),
            IanaTimeZone::new("Europe/Oslo").unwrap(),
        ));

        store.insert_location(location.clone()).unwrap();
        assert!(matches!(
            store.insert_location(location.clone()),
            Err(StoreError::UniqueViolation(_))
        ));
        assert_eq!(
            store.location(location.id_typed()).unwrap().as_deref(),
            Some(location.as_ref())
        );
    }

    #[test]
    fn store_errors_map_into_domain_errors() {
        assert!(matches!(
            DomainError::from(StoreError::UniqueViolation("k".into())),
            DomainError::DuplicateEntity(_)
        ));
        assert!(matches!(
            DomainError::from(StoreError::NotFound("k".into())),
            DomainError::NotFound(_)
        ));
        assert!(matches!(
            DomainError::from(StoreError::Poisoned),
            DomainError::Storage(_)
        ));
    }
}
