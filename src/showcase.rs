//! The plain portfolio page, with per-project likes.

use crate::portfolio::PortfolioRecord;
use crate::session::Session;
use std::fmt::Write;

const LIKED: &str = "♥";
const UNLIKED: &str = "♡";

/// Render the whole page. Liked projects carry a filled heart.
pub fn render_page(record: Option<&PortfolioRecord>, session: &Session) -> String {
    let Some(record) = record else {
        return "Loading...".to_string();
    };

    let mut page = String::new();
    // Writing to a String cannot fail.
    let _ = write_page(&mut page, record, session);
    page
}

fn write_page(page: &mut String, record: &PortfolioRecord, session: &Session) -> std::fmt::Result {
    writeln!(page, "{}", record.name)?;
    writeln!(page, "{}\n", record.tagline)?;

    writeln!(page, "== About Me ==")?;
    writeln!(page, "{}\n", record.about)?;

    writeln!(page, "== Skills ==")?;
    writeln!(page, "{}\n", record.skills.join(" · "))?;

    writeln!(page, "== Projects ==")?;
    for (i, project) in record.projects.iter().enumerate() {
        let heart = if session.is_liked(&project.name) {
            LIKED
        } else {
            UNLIKED
        };
        writeln!(page, "[{}] {} {}", i + 1, project.name, heart)?;
        writeln!(page, "    {}", project.description)?;
        if !project.tech.is_empty() {
            writeln!(page, "    {}", project.tech.join(", "))?;
        }
        writeln!(page, "    {}", project.url)?;
    }
    writeln!(page)?;

    writeln!(page, "== Experience ==")?;
    for exp in &record.experience {
        writeln!(page, "{}  {} @ {}", exp.year, exp.title, exp.company)?;
        writeln!(page, "    {}", exp.description)?;
    }
    writeln!(page)?;

    writeln!(page, "== Get In Touch ==")?;
    writeln!(
        page,
        "Feel free to reach out for collaborations or just a friendly chat."
    )?;
    writeln!(page, "mailto:{}", record.contact.email)?;
    writeln!(page, "{}", record.contact.github)?;
    write!(page, "{}", record.contact.linkedin)
}

/// Like or unlike the project at 1-based `index`.
///
/// Returns the project name and whether it is now liked, or `None` when
/// there is no such project.
pub fn toggle_like<'r>(
    record: &'r PortfolioRecord,
    session: &mut Session,
    index: usize,
) -> Option<(&'r str, bool)> {
    let project = record.projects.get(index.checked_sub(1)?)?;
    let liked = session.toggle_like(&project.name);
    Some((project.name.as_str(), liked))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_without_record() {
        assert_eq!(render_page(None, &Session::new()), "Loading...");
    }

    #[test]
    fn test_page_has_every_section() {
        let record = PortfolioRecord::sample();
        let page = render_page(Some(&record), &Session::new());
        for heading in [
            "== About Me ==",
            "== Skills ==",
            "== Projects ==",
            "== Experience ==",
            "== Get In Touch ==",
        ] {
            assert!(page.contains(heading), "missing {heading}");
        }
        assert!(page.starts_with(&record.name));
        assert!(page.contains(&record.contact.email));
        assert!(!page.contains(LIKED));
    }

    #[test]
    fn test_toggle_like_by_index() {
        let record = PortfolioRecord::sample();
        let mut session = Session::new();
        let first = record.projects[0].name.clone();

        assert_eq!(
            toggle_like(&record, &mut session, 1),
            Some((first.as_str(), true))
        );
        let page = render_page(Some(&record), &session);
        assert!(page.contains(&format!("[1] {first} {LIKED}")));

        assert_eq!(
            toggle_like(&record, &mut session, 1),
            Some((first.as_str(), false))
        );
        assert!(!session.is_liked(&first));
    }

    #[test]
    fn test_toggle_like_out_of_range() {
        let record = PortfolioRecord::sample();
        let mut session = Session::new();
        assert_eq!(toggle_like(&record, &mut session, 0), None);
        assert_eq!(
            toggle_like(&record, &mut session, record.projects.len() + 1),
            None
        );
        assert_eq!(session.liked_projects().count(), 0);
    }
}
