//! Success pie chart
//!
//! - every site: one slice per launch site, sized by its success rate
//! - one site: one slice per outcome class, sized by launch count

use std::collections::BTreeMap;

use super::figure::Figure;
use crate::dataset::{Dataset, SiteSelection};

/// Pie figure for the selected site
pub fn success_pie_chart(dataset: &Dataset, site: &SiteSelection) -> Figure {
    match site {
        SiteSelection::All => success_rate_by_site(dataset),
        SiteSelection::Site(name) => outcome_counts_for_site(dataset, site, name),
    }
}

fn success_rate_by_site(dataset: &Dataset) -> Figure {
    // site -> (successes, launches)
    let mut groups: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for record in dataset.records() {
        let entry = groups.entry(record.launch_site.as_str()).or_insert((0, 0));
        entry.0 += u64::from(record.class.value());
        entry.1 += 1;
    }

    let (labels, values) = groups
        .into_iter()
        .map(|(site, (successes, launches))| {
            (site.to_string(), successes as f64 / launches as f64)
        })
        .unzip();

    Figure::pie("Total Success Launches", labels, values)
}

fn outcome_counts_for_site(dataset: &Dataset, site: &SiteSelection, name: &str) -> Figure {
    // Distinct class values in first-appearance order
    let mut counts: Vec<(u8, u64)> = Vec::with_capacity(2);
    for record in dataset.filter(site, None) {
        let class = record.class.value();
        match counts.iter_mut().find(|(c, _)| *c == class) {
            Some((_, count)) => *count += 1,
            None => counts.push((class, 1)),
        }
    }

    if counts.is_empty() {
        return Figure::pie(
            format!("No data available for {}", name),
            vec!["Failure".to_string(), "Success".to_string()],
            vec![0.0, 0.0],
        );
    }

    let (labels, values) = counts
        .into_iter()
        .map(|(class, count)| (class.to_string(), count as f64))
        .unzip();

    Figure::pie(
        format!("Success and Failure Count for {}", name),
        labels,
        values,
    )
}
