//! Form Input Types
//!
//! The fixed-choice fields the prediction form collects. The enums are the
//! only validation layer: a value that deserializes is a value the form
//! offers, so downstream code never re-checks categories.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EXPERIENCE, MAX_EXPERIENCE, MIN_EXPERIENCE};

// ============================================================================
// CATEGORICAL FIELDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Company {
    Google,
    Amazon,
    Facebook,
    Microsoft,
    #[serde(rename = "TCS")]
    Tcs,
    Infosys,
    Wipro,
}

impl Company {
    pub const ALL: [Company; 7] = [
        Company::Google,
        Company::Amazon,
        Company::Facebook,
        Company::Microsoft,
        Company::Tcs,
        Company::Infosys,
        Company::Wipro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Company::Google => "Google",
            Company::Amazon => "Amazon",
            Company::Facebook => "Facebook",
            Company::Microsoft => "Microsoft",
            Company::Tcs => "TCS",
            Company::Infosys => "Infosys",
            Company::Wipro => "Wipro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "High School")]
    HighSchool,
    Bachelor,
    Master,
    #[serde(rename = "PhD")]
    PhD,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::HighSchool,
        EducationLevel::Bachelor,
        EducationLevel::Master,
        EducationLevel::PhD,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Bachelor => "Bachelor",
            EducationLevel::Master => "Master",
            EducationLevel::PhD => "PhD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    Bangalore,
    Hyderabad,
    Delhi,
    Mumbai,
    Chennai,
    Pune,
}

impl Location {
    pub const ALL: [Location; 6] = [
        Location::Bangalore,
        Location::Hyderabad,
        Location::Delhi,
        Location::Mumbai,
        Location::Chennai,
        Location::Pune,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Bangalore => "Bangalore",
            Location::Hyderabad => "Hyderabad",
            Location::Delhi => "Delhi",
            Location::Mumbai => "Mumbai",
            Location::Chennai => "Chennai",
            Location::Pune => "Pune",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobTitle {
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "Software Engineer")]
    SoftwareEngineer,
    #[serde(rename = "Product Manager")]
    ProductManager,
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "Business Analyst")]
    BusinessAnalyst,
}

impl JobTitle {
    pub const ALL: [JobTitle; 5] = [
        JobTitle::DataScientist,
        JobTitle::SoftwareEngineer,
        JobTitle::ProductManager,
        JobTitle::Hr,
        JobTitle::BusinessAnalyst,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobTitle::DataScientist => "Data Scientist",
            JobTitle::SoftwareEngineer => "Software Engineer",
            JobTitle::ProductManager => "Product Manager",
            JobTitle::Hr => "HR",
            JobTitle::BusinessAnalyst => "Business Analyst",
        }
    }
}

// ============================================================================
// INPUT RECORD
// ============================================================================

/// One form submission. Built per click, discarded after one prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputRecord {
    pub company: Company,
    pub education: EducationLevel,
    pub years_of_experience: u32,
    pub location: Location,
    pub job_title: JobTitle,
}

impl InputRecord {
    /// Experience clamped to the form's bounds. The UI enforces the range
    /// already; this covers payloads arriving outside the widget.
    pub fn experience(&self) -> u32 {
        self.years_of_experience.clamp(MIN_EXPERIENCE, MAX_EXPERIENCE)
    }
}

// ============================================================================
// FORM OPTIONS (for Frontend)
// ============================================================================

/// Everything the frontend needs to render the form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormOptions {
    pub companies: Vec<String>,
    pub education_levels: Vec<String>,
    pub locations: Vec<String>,
    pub job_titles: Vec<String>,
    pub min_experience: u32,
    pub max_experience: u32,
    pub default_experience: u32,
}

impl FormOptions {
    pub fn current() -> Self {
        Self {
            companies: Company::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            education_levels: EducationLevel::ALL.iter().map(|e| e.as_str().to_string()).collect(),
            locations: Location::ALL.iter().map(|l| l.as_str().to_string()).collect(),
            job_titles: JobTitle::ALL.iter().map(|j| j.as_str().to_string()).collect(),
            min_experience: MIN_EXPERIENCE,
            max_experience: MAX_EXPERIENCE,
            default_experience: DEFAULT_EXPERIENCE,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
