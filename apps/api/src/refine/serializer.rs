//! Resume Serializer: flattens a ResumeRecord into the canonical plain-text
//! layout fed to the prompt templates.

use crate::models::resume::ResumeRecord;

/// Renders the record into the fixed section layout.
///
/// Pure and deterministic: the same record always yields byte-identical
/// text. Empty fields serialize as empty lines; the `Projects:` block is
/// omitted entirely when there are no projects.
pub fn serialize(record: &ResumeRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Name: {}\nEmail: {}\nPhone: {}\nLinkedIn: {}\n\n",
        record.contact.name, record.contact.email, record.contact.phone, record.contact.linkedin_url
    ));
    out.push_str(&format!("Professional Summary:\n{}\n\n", record.summary));

    out.push_str("Work Experience:\n");
    for job in &record.jobs {
        out.push_str(&format!(
            "{} – {}\n{}\n{}\n\n",
            job.title, job.company, job.dates, job.description
        ));
    }

    if !record.projects.is_empty() {
        out.push_str("Projects:\n");
        for project in &record.projects {
            out.push_str(&format!("{}\n{}\n\n", project.title, project.description));
        }
    }

    out.push_str("Education:\n");
    for entry in &record.education {
        out.push_str(&format!(
            "{} – {}\n{}\n\n",
            entry.degree, entry.school, entry.dates
        ));
    }

    out.push_str(&format!("Skills:\n{}\n\n", record.skills));
    out.push_str(&format!("Certifications:\n{}\n\n", record.certifications));
    out.push_str(&format!("Languages:\n{}\n", record.languages));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        ContactInfo, EducationEntry, JobEntry, ProjectEntry, ResumeRecord,
    };

    fn sample_record() -> ResumeRecord {
        ResumeRecord {
            contact: ContactInfo {
                name: "A".to_string(),
                email: "a@x.com".to_string(),
                phone: String::new(),
                linkedin_url: String::new(),
            },
            summary: "Engineer.".to_string(),
            jobs: vec![JobEntry {
                title: "Dev".to_string(),
                company: "X".to_string(),
                dates: "2020-2021".to_string(),
                description: "Built things.".to_string(),
            }],
            projects: vec![],
            education: vec![EducationEntry {
                degree: "BSc".to_string(),
                school: "Y".to_string(),
                dates: "2016-2020".to_string(),
            }],
            skills: "Go".to_string(),
            certifications: String::new(),
            languages: "English".to_string(),
        }
    }

    #[test]
    fn test_zero_projects_omits_the_header_entirely() {
        let text = serialize(&sample_record());
        assert!(!text.contains("Projects:"));
    }

    #[test]
    fn test_projects_block_appears_when_present() {
        let mut record = sample_record();
        record.projects = vec![ProjectEntry {
            title: "CLI tool".to_string(),
            description: "Parses resumes.".to_string(),
        }];
        let text = serialize(&record);
        assert!(text.contains("Projects:\nCLI tool\nParses resumes.\n\n"));
        // Section order: projects sit between work experience and education
        let projects = text.find("Projects:").unwrap();
        assert!(text.find("Work Experience:").unwrap() < projects);
        assert!(projects < text.find("Education:").unwrap());
    }

    #[test]
    fn test_jobs_serialize_in_input_order_with_en_dash_separator() {
        let mut record = sample_record();
        record.jobs = (1..=4)
            .map(|i| JobEntry {
                title: format!("Role{i}"),
                company: format!("Co{i}"),
                dates: format!("202{i}"),
                description: format!("Did thing {i}."),
            })
            .collect();

        let text = serialize(&record);
        for i in 1..=4 {
            assert_eq!(
                text.matches(&format!("Role{i} – Co{i}")).count(),
                1,
                "job {i} separator must appear exactly once"
            );
        }
        assert!(text.find("Role1 – Co1").unwrap() < text.find("Role2 – Co2").unwrap());
        assert!(text.find("Role3 – Co3").unwrap() < text.find("Role4 – Co4").unwrap());
    }

    #[test]
    fn test_serialization_is_pure() {
        let record = sample_record();
        assert_eq!(serialize(&record), serialize(&record));
    }

    #[test]
    fn test_exact_layout_for_the_reference_record() {
        let text = serialize(&sample_record());
        let expected = "Name: A\nEmail: a@x.com\nPhone: \nLinkedIn: \n\n\
                        Professional Summary:\nEngineer.\n\n\
                        Work Experience:\nDev – X\n2020-2021\nBuilt things.\n\n\
                        Education:\nBSc – Y\n2016-2020\n\n\
                        Skills:\nGo\n\n\
                        Certifications:\n\n\n\
                        Languages:\nEnglish\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_record_still_renders_every_fixed_section() {
        let text = serialize(&ResumeRecord::default());
        for header in [
            "Name:",
            "Email:",
            "Phone:",
            "LinkedIn:",
            "Professional Summary:",
            "Work Experience:",
            "Education:",
            "Skills:",
            "Certifications:",
            "Languages:",
        ] {
            assert!(text.contains(header), "missing header {header}");
        }
        assert!(!text.contains("Projects:"));
    }
}
