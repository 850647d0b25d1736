use std::path::PathBuf;

use collapse_engine::{Requirement, Shape, catalog};

use crate::store::DataStore;

#[derive(Debug, Clone, clap::Args)]
pub struct AchievementsArg {
    /// Directory holding the autosave, profile, and ranking files
    #[clap(long, default_value = "./data")]
    data_dir: PathBuf,
    /// Also print the shape templates for collection achievements
    #[clap(long)]
    shapes: bool,
}

pub fn run(arg: &AchievementsArg) -> anyhow::Result<()> {
    let AchievementsArg { data_dir, shapes } = arg;

    let store = DataStore::new(data_dir.clone());
    let log = store.load_achievements()?;

    for achievement in catalog() {
        let marker = if log.is_unlocked(achievement.id) {
            "[x]"
        } else {
            "[ ]"
        };
        let unlocked_at = log
            .record(achievement.id)
            .and_then(|record| record.unlocked_at)
            .map(|at| format!(" (unlocked {})", at.format("%Y-%m-%d")))
            .unwrap_or_default();
        println!("{marker} {} - {}{unlocked_at}", achievement.id, achievement.description);

        if *shapes
            && let Requirement::Shapes(templates) = &achievement.requirement
        {
            for (template, count) in group_congruent(templates) {
                println!("    {count} x");
                for line in template.ascii_art().lines() {
                    println!("      {line}");
                }
            }
        }
    }

    Ok(())
}

/// Groups a template list by congruence so repeated shapes print once
/// with a count.
fn group_congruent(templates: &[Shape]) -> Vec<(&Shape, usize)> {
    let mut groups: Vec<(&Shape, usize)> = Vec::new();
    for template in templates {
        match groups.iter_mut().find(|(kept, _)| kept.matches(template)) {
            Some((_, count)) => *count += 1,
            None => groups.push((template, 1)),
        }
    }
    groups
}
