//! The fixed career blueprint catalog.

use super::model::CareerBlueprint;

/// All known career blueprints, in presentation order.
///
/// Order matters: ties in scoring keep this order, and the empty-overlap
/// fallback picks the first two entries.
pub static CAREER_BLUEPRINTS: [CareerBlueprint; 3] = [
    CareerBlueprint {
        career_path: "Full Stack Developer",
        salary_range: "$80k - $140k",
        growth_outlook: "Strong demand across startups and enterprises.",
        required_skills: &[
            "Programming",
            "Web Development",
            "Cloud Computing",
            "Data Analysis",
        ],
        summary: "Own the full product lifecycle, from front-end polish to resilient back-end services.",
        plan_key: "Full Stack Developer",
        interest_tags: &["Technology", "Software Development", "Engineering"],
    },
    CareerBlueprint {
        career_path: "Data Scientist",
        salary_range: "$90k - $150k",
        growth_outlook: "Rapid growth as organisations lean on data-driven decisions.",
        required_skills: &[
            "Data Analysis",
            "Programming",
            "Statistics",
            "Machine Learning",
        ],
        summary: "Blend analytics, experimentation, and storytelling to steer strategic choices.",
        plan_key: "Data Scientist",
        interest_tags: &["Data Analysis", "Technology", "Project Management"],
    },
    CareerBlueprint {
        career_path: "UI/UX Designer",
        salary_range: "$70k - $120k",
        growth_outlook: "Consistent demand for research-led digital product designers.",
        required_skills: &["UI/UX", "Graphic Design", "Accessibility", "Prototyping"],
        summary: "Research, prototype, and launch intuitive experiences with cross-functional teams.",
        plan_key: "UI/UX Designer",
        interest_tags: &["Design", "Marketing", "Customer Support"],
    },
];

/// Finds a blueprint by its career path (exact match after trimming).
pub fn find_blueprint(career_path: &str) -> Option<&'static CareerBlueprint> {
    let wanted = career_path.trim();
    CAREER_BLUEPRINTS
        .iter()
        .find(|blueprint| blueprint.career_path == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_plan_keys_match_career_paths() {
        for blueprint in CAREER_BLUEPRINTS.iter() {
            assert_eq!(blueprint.plan_key, blueprint.career_path);
        }
    }

    #[test]
    fn test_find_blueprint() {
        assert!(find_blueprint(" Data Scientist ").is_some());
        assert!(find_blueprint("Astronaut").is_none());
    }
}
