//! Form templates: which fields a government form needs and where to get it.

use serde::Serialize;

use super::field::Field;

/// Id of the template used when a requested id is unknown.
pub const DEFAULT_TEMPLATE_ID: &str = "standard";

/// An external resource related to a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelatedLink {
    /// Display name.
    pub name: &'static str,
    /// Resource URL.
    pub url: &'static str,
    /// Whether the linked form can be prefilled from a filled form.
    pub is_fillable: bool,
}

/// A named view over the extractable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    /// Template identifier (e.g. `pan`).
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Fields this form needs, in display order.
    pub required_fields: &'static [Field],
    /// Related external resources.
    pub related_links: &'static [RelatedLink],
}

impl Template {
    /// Whether the template requires the given field.
    pub fn requires(&self, field: Field) -> bool {
        self.required_fields.contains(&field)
    }
}

static BUILTIN_TEMPLATES: &[Template] = &[
    Template {
        id: "standard",
        title: "Standard Identity Form",
        required_fields: &[
            Field::FullName,
            Field::Dob,
            Field::Address,
            Field::Aadhaar,
            Field::Pan,
            Field::Phone,
        ],
        related_links: &[],
    },
    Template {
        id: "aadhaar",
        title: "Aadhaar Enrolment / Update Form",
        required_fields: &[Field::FullName, Field::Dob, Field::Address, Field::Aadhaar],
        related_links: &[
            RelatedLink {
                name: "UIDAI",
                url: "https://uidai.gov.in",
                is_fillable: false,
            },
            RelatedLink {
                name: "myAadhaar update portal",
                url: "https://myaadhaar.uidai.gov.in",
                is_fillable: true,
            },
        ],
    },
    Template {
        id: "pan",
        title: "PAN Application (Form 49A)",
        required_fields: &[
            Field::FullName,
            Field::Dob,
            Field::Address,
            Field::Pan,
            Field::Phone,
        ],
        related_links: &[
            RelatedLink {
                name: "Protean PAN services",
                url: "https://www.protean-tinpan.com",
                is_fillable: true,
            },
            RelatedLink {
                name: "UTIITSL PAN services",
                url: "https://www.pan.utiitsl.com",
                is_fillable: true,
            },
        ],
    },
    Template {
        id: "passport",
        title: "Passport Application",
        required_fields: &[
            Field::FullName,
            Field::Dob,
            Field::Address,
            Field::Pincode,
            Field::Phone,
        ],
        related_links: &[RelatedLink {
            name: "Passport Seva",
            url: "https://www.passportindia.gov.in",
            is_fillable: true,
        }],
    },
    Template {
        id: "voter",
        title: "Voter Registration (Form 6)",
        required_fields: &[
            Field::FullName,
            Field::Dob,
            Field::Address,
            Field::Aadhaar,
            Field::Phone,
        ],
        related_links: &[RelatedLink {
            name: "Voters' Service Portal",
            url: "https://voters.eci.gov.in",
            is_fillable: true,
        }],
    },
    Template {
        id: "income_tax",
        title: "Income Tax Return Details",
        required_fields: &[
            Field::FullName,
            Field::Dob,
            Field::Pan,
            Field::Aadhaar,
            Field::Address,
            Field::Pincode,
            Field::Phone,
        ],
        related_links: &[RelatedLink {
            name: "Income Tax e-Filing",
            url: "https://www.incometax.gov.in",
            is_fillable: false,
        }],
    },
    Template {
        id: "driving_licence",
        title: "Driving Licence Application",
        required_fields: &[
            Field::FullName,
            Field::Dob,
            Field::Address,
            Field::Pincode,
            Field::Aadhaar,
            Field::Phone,
        ],
        related_links: &[
            RelatedLink {
                name: "Parivahan Sewa",
                url: "https://parivahan.gov.in",
                is_fillable: false,
            },
            RelatedLink {
                name: "Sarathi licence services",
                url: "https://sarathi.parivahan.gov.in",
                is_fillable: true,
            },
        ],
    },
];

/// Read-only lookup of form templates.
#[derive(Debug, Clone, Copy)]
pub struct TemplateRegistry {
    templates: &'static [Template],
    fallback: &'static Template,
}

impl TemplateRegistry {
    /// Registry with the built-in templates.
    pub fn builtin() -> Self {
        Self {
            templates: BUILTIN_TEMPLATES,
            fallback: &BUILTIN_TEMPLATES[0],
        }
    }

    /// Registry over a custom template set.
    ///
    /// Returns `None` when the set has no `standard` template to fall back to.
    pub fn from_static(templates: &'static [Template]) -> Option<Self> {
        let fallback = templates.iter().find(|t| t.id == DEFAULT_TEMPLATE_ID)?;
        Some(Self { templates, fallback })
    }

    /// Exact lookup.
    pub fn get(&self, id: &str) -> Option<&'static Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Lookup falling back to the `standard` template for unknown ids.
    pub fn resolve(&self, id: &str) -> &'static Template {
        self.get(id).unwrap_or(self.fallback)
    }

    /// All templates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Template> {
        self.templates.iter()
    }

    /// Known template ids.
    pub fn ids(&self) -> Vec<&'static str> {
        self.templates.iter().map(|t| t.id).collect()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
