//! Binding of semantic roles to spreadsheet columns.
//!
//! A [`ColumnSelection`] is what the user asked for: an optional column name
//! per role. Resolving it against a [`RecordSet`] validates every binding
//! once and yields a [`ColumnMapping`], which can only exist when all four
//! bound columns are present.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{MappingError, MappingResult};
use crate::records::RecordSet;

/// Semantic role a column plays in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Hiring company name.
    Company,
    /// Job location.
    Location,
    /// Delimited list of skills.
    Skills,
    /// Free-text job description.
    Description,
}

impl Role {
    /// All roles in report order.
    pub const ALL: [Self; 4] = [
        Self::Company,
        Self::Location,
        Self::Skills,
        Self::Description,
    ];

    /// 0-based column index bound to this role when the user picks nothing.
    pub const fn default_index(self) -> usize {
        match self {
            Self::Company => 1,
            Self::Location => 4,
            Self::Skills => 6,
            Self::Description => 7,
        }
    }

    /// Lowercase role name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Location => "location",
            Self::Skills => "skills",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-chosen column names per role. `None` means "use the positional default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSelection {
    /// Column holding the hiring company.
    pub company: Option<String>,
    /// Column holding the job location.
    pub location: Option<String>,
    /// Column holding the delimited skills list.
    pub skills: Option<String>,
    /// Column holding the free-text description.
    pub description: Option<String>,
}

impl ColumnSelection {
    /// The explicit choice for a role, if any.
    pub fn get(&self, role: Role) -> Option<&str> {
        match role {
            Role::Company => self.company.as_deref(),
            Role::Location => self.location.as_deref(),
            Role::Skills => self.skills.as_deref(),
            Role::Description => self.description.as_deref(),
        }
    }

    /// Layer `other` on top of `self`: choices in `other` win.
    #[must_use]
    pub fn overridden_by(self, other: Self) -> Self {
        Self {
            company: other.company.or(self.company),
            location: other.location.or(self.location),
            skills: other.skills.or(self.skills),
            description: other.description.or(self.description),
        }
    }

    /// Validate every role against the record set's columns.
    #[tracing::instrument(skip_all)]
    pub fn resolve(&self, records: &RecordSet) -> MappingResult<ColumnMapping> {
        let columns = records.columns();
        let bind = |role: Role| -> MappingResult<Binding> {
            match self.get(role) {
                Some(name) => records
                    .column_index(name)
                    .map(|index| Binding {
                        index,
                        name: name.to_string(),
                    })
                    .ok_or_else(|| MappingError::UnknownColumn {
                        role,
                        name: name.to_string(),
                        available: columns.join(", "),
                    }),
                None => {
                    let index = role.default_index();
                    columns
                        .get(index)
                        .map(|name| Binding {
                            index,
                            name: name.clone(),
                        })
                        .ok_or(MappingError::IndexOutOfRange {
                            role,
                            index,
                            columns: columns.len(),
                        })
                }
            }
        };

        let mapping = ColumnMapping {
            company: bind(Role::Company)?,
            location: bind(Role::Location)?,
            skills: bind(Role::Skills)?,
            description: bind(Role::Description)?,
        };
        tracing::debug!(
            company = %mapping.company.name,
            location = %mapping.location.name,
            skills = %mapping.skills.name,
            description = %mapping.description.name,
            "column mapping resolved"
        );
        Ok(mapping)
    }
}

/// One resolved role binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Binding {
    /// 0-based column index.
    pub index: usize,
    /// Column name.
    pub name: String,
}

/// A validated role-to-column mapping for one record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ColumnMapping {
    company: Binding,
    location: Binding,
    skills: Binding,
    description: Binding,
}

impl ColumnMapping {
    /// Binding for a role.
    pub const fn binding(&self, role: Role) -> &Binding {
        match role {
            Role::Company => &self.company,
            Role::Location => &self.location,
            Role::Skills => &self.skills,
            Role::Description => &self.description,
        }
    }

    /// Column index for a role.
    pub const fn index(&self, role: Role) -> usize {
        self.binding(role).index
    }

    /// Column name for a role.
    pub fn name(&self, role: Role) -> &str {
        &self.binding(role).name
    }
    /// Check that every binding names the same column in `records`.
    pub fn check(&self, records: &RecordSet) -> MappingResult<()> {
        for role in Role::ALL {
            let binding = self.binding(role);
            if records.columns().get(binding.index) != Some(&binding.name) {
                return Err(MappingError::NotInRecordSet {
                    role,
                    name: binding.name.clone(),
                    index: binding.index,
                });
            }
        }
        Ok(())
    }
}
