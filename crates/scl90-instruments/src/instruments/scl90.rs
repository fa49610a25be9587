use scl90_core::models::answer::ItemId;

use crate::Instrument;
use crate::config::{Factor, ResponseOption};

pub const ITEM_COUNT: ItemId = 90;

/// SCL-90: Symptom Checklist-90.
/// 90 self-report items rated 1-5 over the past week, grouped into nine
/// symptom dimensions plus a set of additional items.
pub struct Scl90;

impl Instrument for Scl90 {
    fn id(&self) -> &str {
        "scl90"
    }

    fn name(&self) -> &str {
        "SCL-90"
    }

    fn item_count(&self) -> ItemId {
        ITEM_COUNT
    }

    fn factors(&self) -> &[Factor] {
        static FACTORS: std::sync::LazyLock<Vec<Factor>> = std::sync::LazyLock::new(|| {
            vec![
                factor(
                    "somatization",
                    "Somatization",
                    &[1, 4, 12, 27, 40, 42, 48, 49, 52, 53, 56, 58],
                    "Bodily discomfort such as headaches, chest tightness, nausea, \
                     breathing difficulty and aching muscles.",
                ),
                factor(
                    "obsessive_compulsive",
                    "Obsessive-Compulsive",
                    &[3, 9, 10, 28, 38, 45, 46, 51, 55, 65],
                    "Unwanted thoughts and urges that are hard to resist, repeated \
                     checking, and trouble concentrating or making decisions.",
                ),
                factor(
                    "interpersonal_sensitivity",
                    "Interpersonal Sensitivity",
                    &[6, 21, 34, 36, 37, 41, 61, 69, 73],
                    "Feeling inferior or uneasy around others, self-consciousness and \
                     discomfort in social situations.",
                ),
                factor(
                    "depression",
                    "Depression",
                    &[5, 14, 15, 20, 22, 26, 29, 30, 31, 32, 54, 71, 79],
                    "Low mood, loss of interest and energy, hopelessness, and in more \
                     severe cases thoughts of death.",
                ),
                factor(
                    "anxiety",
                    "Anxiety",
                    &[2, 17, 23, 33, 39, 57, 72, 78, 80, 86],
                    "Nervousness, tension and restlessness, sometimes with panic and \
                     a racing heart.",
                ),
                factor(
                    "hostility",
                    "Hostility",
                    &[11, 24, 63, 67, 74, 81],
                    "Irritability and anger, urges to argue, shout or break things.",
                ),
                factor(
                    "phobic_anxiety",
                    "Phobic Anxiety",
                    &[13, 25, 47, 50, 70, 75, 82],
                    "Persistent fear of particular places, situations or crowds that \
                     leads to avoiding them.",
                ),
                factor(
                    "paranoid_ideation",
                    "Paranoid Ideation",
                    &[8, 18, 43, 68, 76, 83],
                    "Suspiciousness, feeling watched or talked about, and a sense of \
                     being treated unfairly.",
                ),
                factor(
                    "psychoticism",
                    "Psychoticism",
                    &[7, 16, 35, 62, 77, 84, 85, 87, 88, 90],
                    "Feelings of isolation and detachment, up to unusual experiences \
                     such as hearing voices or thoughts being controlled.",
                ),
                factor(
                    "additional",
                    "Additional Items",
                    &[19, 44, 59, 60, 64, 66, 89],
                    "Sleep and appetite problems and other complaints outside the nine \
                     dimensions.",
                ),
            ]
        });
        &FACTORS
    }

    fn response_options(&self) -> &[ResponseOption] {
        static OPTIONS: [ResponseOption; 5] = [
            ResponseOption { value: 1, label: "Not at all" },
            ResponseOption { value: 2, label: "A little bit" },
            ResponseOption { value: 3, label: "Moderately" },
            ResponseOption { value: 4, label: "Quite a bit" },
            ResponseOption { value: 5, label: "Extremely" },
        ];
        &OPTIONS
    }
}

fn factor(id: &str, name: &str, item_ids: &[ItemId], description: &str) -> Factor {
    Factor {
        id: id.to_string(),
        name: name.to_string(),
        item_ids: item_ids.to_vec(),
        description: description.to_string(),
    }
}
