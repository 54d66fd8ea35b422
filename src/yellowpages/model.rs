use crate::error::ValidationError;
use crate::validate::{validate_name, validate_phone};
use std::fmt;

/// Primary key value of a record that has not been added to a directory yet.
pub const UNASSIGNED_PK: u64 = 0;

/// The fields a record carries, in storage order after the pk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Surname,
    Name,
    Patronymic,
    Organization,
    WorkPhone,
    CellPhone,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Surname,
        Field::Name,
        Field::Patronymic,
        Field::Organization,
        Field::WorkPhone,
        Field::CellPhone,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Surname => "Surname",
            Field::Name => "Name",
            Field::Patronymic => "Patronymic",
            Field::Organization => "Organization",
            Field::WorkPhone => "Work phone",
            Field::CellPhone => "Cell phone",
        }
    }

    /// Runs the validator for this field. Organization is free text and passes through.
    pub fn validate(&self, value: &str) -> Result<String, ValidationError> {
        match self {
            Field::Surname | Field::Name | Field::Patronymic => validate_name(value),
            Field::WorkPhone | Field::CellPhone => validate_phone(value),
            Field::Organization => Ok(value.to_string()),
        }
    }
}

/// A contact entry. Name and phone fields are always in validated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pk: u64,
    surname: String,
    name: String,
    patronymic: String,
    organization: String,
    work_phone: String,
    cell_phone: String,
}

impl Record {
    pub fn new(
        surname: &str,
        name: &str,
        patronymic: &str,
        organization: &str,
        work_phone: &str,
        cell_phone: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            pk: UNASSIGNED_PK,
            surname: validate_name(surname)?,
            name: validate_name(name)?,
            patronymic: validate_name(patronymic)?,
            organization: organization.to_string(),
            work_phone: validate_phone(work_phone)?,
            cell_phone: validate_phone(cell_phone)?,
        })
    }

    pub fn pk(&self) -> u64 {
        self.pk
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn patronymic(&self) -> &str {
        &self.patronymic
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn work_phone(&self) -> &str {
        &self.work_phone
    }

    pub fn cell_phone(&self) -> &str {
        &self.cell_phone
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Surname => &self.surname,
            Field::Name => &self.name,
            Field::Patronymic => &self.patronymic,
            Field::Organization => &self.organization,
            Field::WorkPhone => &self.work_phone,
            Field::CellPhone => &self.cell_phone,
        }
    }

    /// "Surname Name Patronymic", as shown in listings.
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.surname, self.name, self.patronymic)
    }

    pub(crate) fn assign_pk(&mut self, pk: u64) {
        self.pk = pk;
    }

    /// Validates every field in `update` and only then writes them, so a rejected
    /// update leaves the record untouched.
    pub(crate) fn apply(&mut self, update: &RecordUpdate) -> Result<(), ValidationError> {
        let validated = update
            .fields()
            .map(|(field, value)| field.validate(value).map(|v| (field, v)))
            .collect::<Result<Vec<_>, _>>()?;

        for (field, value) in validated {
            let slot = match field {
                Field::Surname => &mut self.surname,
                Field::Name => &mut self.name,
                Field::Patronymic => &mut self.patronymic,
                Field::Organization => &mut self.organization,
                Field::WorkPhone => &mut self.work_phone,
                Field::CellPhone => &mut self.cell_phone,
            };
            *slot = value;
        }
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; {}; {}; {}; {}; {}",
            self.surname,
            self.name,
            self.patronymic,
            self.organization,
            self.work_phone,
            self.cell_phone
        )
    }
}

/// A partial edit: only the fields that are `Some` get replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub surname: Option<String>,
    pub name: Option<String>,
    pub patronymic: Option<String>,
    pub organization: Option<String>,
    pub work_phone: Option<String>,
    pub cell_phone: Option<String>,
}

impl RecordUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            Field::Surname => self.surname = value,
            Field::Name => self.name = value,
            Field::Patronymic => self.patronymic = value,
            Field::Organization => self.organization = value,
            Field::WorkPhone => self.work_phone = value,
            Field::CellPhone => self.cell_phone = value,
        }
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// The fields present in this update, in storage order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::Surname, &self.surname),
            (Field::Name, &self.name),
            (Field::Patronymic, &self.patronymic),
            (Field::Organization, &self.organization),
            (Field::WorkPhone, &self.work_phone),
            (Field::CellPhone, &self.cell_phone),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    }
}
