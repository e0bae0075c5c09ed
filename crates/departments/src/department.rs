use chrono::{DateTime, Utc};

use directory_core::{
    DepartmentId, DomainError, DomainResult, Entity, EntityLifeTime, LocationId, PositionId,
    UniquenessVerifier,
};

use crate::links::{LocationInDepartment, PositionInDepartment};
use crate::value_objects::{DepartmentDepth, DepartmentIdentifier, DepartmentName, DepartmentPath};

/// Verifier consulted by the department factories.
pub type DepartmentVerifier<'a> = &'a dyn UniquenessVerifier<Department>;

/// Aggregate root: Department.
///
/// Hierarchy fields (`parent_id`, `path`, `depth`) are fixed at construction:
/// - `parent_id == None` ⇔ `depth == 0` ⇔ `path == ""`
/// - a child's path is its parent's path plus its own identifier
/// - a child's depth is its parent's depth plus one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    id: DepartmentId,
    name: DepartmentName,
    identifier: DepartmentIdentifier,
    parent_id: Option<DepartmentId>,
    path: DepartmentPath,
    depth: DepartmentDepth,
    lifetime: EntityLifeTime,
    locations: Vec<LocationInDepartment>,
    positions: Vec<PositionInDepartment>,
}

/// Persisted state used to rebuild a [`Department`] without re-deriving its
/// hierarchy or re-checking uniqueness.
#[derive(Debug, Clone)]
pub struct RestoreDepartment {
    pub id: DepartmentId,
    pub name: DepartmentName,
    pub identifier: DepartmentIdentifier,
    pub parent_id: Option<DepartmentId>,
    pub path: DepartmentPath,
    pub depth: DepartmentDepth,
    pub lifetime: EntityLifeTime,
    pub locations: Vec<LocationInDepartment>,
    pub positions: Vec<PositionInDepartment>,
}

impl Department {
    /// Create a tree root: empty path, depth 0, no parent.
    pub fn create_root(
        name: DepartmentName,
        identifier: DepartmentIdentifier,
        is_active: bool,
        verifier: Option<DepartmentVerifier<'_>>,
    ) -> DomainResult<Self> {
        let candidate = Self::new(
            name,
            identifier,
            None,
            DepartmentPath::root(),
            DepartmentDepth::ROOT,
            is_active,
        );
        candidate.verified(verifier)
    }

    /// Create a department under `parent`.
    ///
    /// `parent` is an `Option` because callers usually resolve it from storage;
    /// a missing parent fails with [`DomainError::NullParent`].
    pub fn create_child(
        name: DepartmentName,
        identifier: DepartmentIdentifier,
        parent: Option<&Department>,
        is_active: bool,
        verifier: Option<DepartmentVerifier<'_>>,
    ) -> DomainResult<Self> {
        let parent = parent.ok_or(DomainError::NullParent)?;
        let path = DepartmentPath::child(&parent.path, &identifier)?;
        let depth = DepartmentDepth::child(parent.depth)?;

        let candidate = Self::new(name, identifier, Some(parent.id), path, depth, is_active);
        candidate.verified(verifier)
    }

    /// Rebuild a department from persisted state.
    ///
    /// Re-checks that root-ness, path and depth agree, and that links are
    /// unique and belong to this department.
    pub fn restore(state: RestoreDepartment) -> DomainResult<Self> {
        if state.parent_id.is_none() != state.path.is_root() {
            return Err(DomainError::invalid_path(format!(
                "department {}: root departments have an empty path and no parent",
                state.id
            )));
        }
        let segments = state.path.segments().count();
        if segments != usize::from(state.depth.value()) {
            return Err(DomainError::invalid_depth(format!(
                "department {}: depth {} does not match path '{}'",
                state.id, state.depth, state.path
            )));
        }

        let mut department = Self {
            id: state.id,
            name: state.name,
            identifier: state.identifier,
            parent_id: state.parent_id,
            path: state.path,
            depth: state.depth,
            lifetime: state.lifetime,
            locations: Vec::with_capacity(state.locations.len()),
            positions: Vec::with_capacity(state.positions.len()),
        };
        for link in state.locations {
            department.push_location_link(link)?;
        }
        for link in state.positions {
            department.push_position_link(link)?;
        }
        Ok(department)
    }

    fn new(
        name: DepartmentName,
        identifier: DepartmentIdentifier,
        parent_id: Option<DepartmentId>,
        path: DepartmentPath,
        depth: DepartmentDepth,
        is_active: bool,
    ) -> Self {
        Self {
            id: DepartmentId::new(),
            name,
            identifier,
            parent_id,
            path,
            depth,
            lifetime: EntityLifeTime::started(is_active),
            locations: Vec::new(),
            positions: Vec::new(),
        }
    }

    fn verified(self, verifier: Option<DepartmentVerifier<'_>>) -> DomainResult<Self> {
        match verifier {
            Some(verifier) if !verifier.check_unique(&self) => {
                Err(DomainError::duplicate_entity(self.scope_description()))
            }
            _ => Ok(self),
        }
    }

    fn scope_description(&self) -> String {
        let scope = match self.parent_id {
            Some(parent) => format!("under department {parent}"),
            None => "among root departments".to_owned(),
        };
        format!(
            "department '{}' ({}) already exists {scope}",
            self.name, self.identifier
        )
    }

    pub fn id_typed(&self) -> DepartmentId {
        self.id
    }

    pub fn name(&self) -> &DepartmentName {
        &self.name
    }

    pub fn identifier(&self) -> &DepartmentIdentifier {
        &self.identifier
    }

    pub fn parent_id(&self) -> Option<DepartmentId> {
        self.parent_id
    }

    pub fn path(&self) -> &DepartmentPath {
        &self.path
    }

    pub fn depth(&self) -> DepartmentDepth {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
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

    pub fn locations(&self) -> &[LocationInDepartment] {
        &self.locations
    }

    pub fn positions(&self) -> &[PositionInDepartment] {
        &self.positions
    }

    pub fn has_location(&self, location_id: LocationId) -> bool {
        self.locations.iter().any(|l| l.location_id() == location_id)
    }

    pub fn has_position(&self, position_id: PositionId) -> bool {
        self.positions.iter().any(|p| p.position_id() == position_id)
    }

    /// Rename, relabel and (de)activate in place.
    ///
    /// Hierarchy fields are left alone, so the path keeps the identifier the
    /// department was created with. Deactivating archives the department.
    pub fn update(
        &mut self,
        name: DepartmentName,
        identifier: DepartmentIdentifier,
        is_active: bool,
    ) -> DomainResult<()> {
        self.ensure_active()?;
        self.name = name;
        self.identifier = identifier;
        self.lifetime = self.lifetime.with_active(is_active).touch();
        Ok(())
    }

    pub fn add_location_link(&mut self, link: LocationInDepartment) -> DomainResult<()> {
        self.ensure_active()?;
        self.push_location_link(link)?;
        self.lifetime = self.lifetime.touch();
        Ok(())
    }

    pub fn add_position_link(&mut self, link: PositionInDepartment) -> DomainResult<()> {
        self.ensure_active()?;
        self.push_position_link(link)?;
        self.lifetime = self.lifetime.touch();
        Ok(())
    }

    fn push_location_link(&mut self, link: LocationInDepartment) -> DomainResult<()> {
        self.ensure_owned(link.department_id())?;
        if self.has_location(link.location_id()) {
            return Err(DomainError::duplicate_association(format!(
                "location {} is already linked to department {}",
                link.location_id(),
                self.id
            )));
        }
        self.locations.push(link);
        Ok(())
    }

    fn push_position_link(&mut self, link: PositionInDepartment) -> DomainResult<()> {
        self.ensure_owned(link.department_id())?;
        if self.has_position(link.position_id()) {
            return Err(DomainError::duplicate_association(format!(
                "position {} is already linked to department {}",
                link.position_id(),
                self.id
            )));
        }
        self.positions.push(link);
        Ok(())
    }

    fn ensure_owned(&self, department_id: DepartmentId) -> DomainResult<()> {
        if department_id != self.id {
            return Err(DomainError::invalid_argument(format!(
                "link belongs to department {department_id}, not {}",
                self.id
            )));
        }
        Ok(())
    }

    fn ensure_active(&self) -> DomainResult<()> {
        if !self.lifetime.is_active() {
            return Err(DomainError::archived(format!("department {}", self.id)));
        }
        Ok(())
    }
}

impl Entity for Department {
    type Id = DepartmentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn lifetime(&self) -> &EntityLifeTime {
        &self.lifetime
    }
}
