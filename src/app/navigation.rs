//! Navigation - Page Selection
//!
//! Resolves which admin page to show and how, from command-line arguments.
//!
//! Usage: `ippis-admin [PAGE] [--search q] [--page n] [--list]`

use clap::Parser;
use clap::builder::RangedU64ValueParser;

use crate::states::Page;

/// What to render
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "ippis-admin", version, about = "Render an IPPIS admin page")]
pub struct PageRequest {
    /// Page to show (falls back to the configured default page)
    #[arg(value_name = "PAGE")]
    pub page: Option<Page>,

    /// Global search query
    #[arg(short, long)]
    pub search: Option<String>,

    /// 1-based page number
    #[arg(short = 'p', long = "page", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub page_number: Option<usize>,

    /// Print the page list instead of a table
    #[arg(short, long = "list")]
    pub list_pages: bool,
}

/// Menu of every page with its record count, the active one marked
pub fn page_list(active: Page, counts: &[(Page, usize)]) -> String {
    counts
        .iter()
        .map(|(page, count)| {
            let marker = if *page == active { '>' } else { ' ' };
            format!("{marker} {:<18} {:<18} {count:>4}", page.slug(), page.title())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_and_options_in_any_order() {
        let request =
            PageRequest::try_parse_from(["ippis-admin", "--page", "2", "maintenance-types", "-s", "oil"]).expect("parse");
        assert_eq!(
            request,
            PageRequest {
                page: Some(Page::MaintenanceTypes),
                search: Some("oil".into()),
                page_number: Some(2),
                list_pages: false,
            }
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        for args in [
            &["--page", "0"][..],
            &["--search"],
            &["payroll"],
            &["assets", "backups"],
            &["--verbose"],
        ] {
            let argv = std::iter::once("ippis-admin").chain(args.iter().copied());
            assert!(PageRequest::try_parse_from(argv).is_err(), "{args:?}");
        }
    }

    #[test]
    fn page_list_marks_active_page() {
        let counts: Vec<(Page, usize)> = Page::ALL.iter().map(|p| (*p, 3)).collect();
        let list = page_list(Page::Backups, &counts);
        assert_eq!(list.lines().count(), Page::ALL.len());
        assert!(list.lines().last().is_some_and(|l| l.starts_with("> backups") && l.ends_with("   3")));
    }
}
