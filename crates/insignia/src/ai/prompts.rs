use crate::platform::PopulatedUnitDetail;

const NOT_SPECIFIED: &str = "not specified";

/// Marketing brief for a single unit listing.
pub fn property_description_prompt(unit: &PopulatedUnitDetail) -> String {
    let unit_type = match unit.bedrooms {
        Some(bedrooms) if bedrooms > 0 => format!("{} bedroom unit", bedrooms),
        _ => "Studio unit".to_string(),
    };
    let features = if unit.unit_features.is_empty() {
        "standard amenities".to_string()
    } else {
        unit.unit_features.join(", ")
    };

    let mut details = vec![
        format!("- Type: {}", unit_type),
        format!("- Size: {} {}", unit.size, unit.size_unit.label()),
        format!(
            "- View: {}",
            unit.view.map_or(NOT_SPECIFIED, |view| view.label())
        ),
        format!("- Key Features: {}", features),
        format!(
            "- Orientation: {}",
            unit.orientation
                .map_or(NOT_SPECIFIED, |orientation| orientation.label())
        ),
        format!(
            "- Finishes Package: {}",
            unit.selected_finishes_package.as_deref().unwrap_or("standard")
        ),
    ];
    if let Some(notes) = unit.customization_notes.as_deref() {
        details.push(format!("- Customization Notes: {}", notes));
    }
    if !unit.area_breakdown.is_empty() {
        let rooms: Vec<&str> = unit
            .area_breakdown
            .iter()
            .map(|item| item.room_name.as_str())
            .collect();
        details.push(format!("- Layout includes: {}", rooms.join(", ")));
    }

    format!(
        "You are a creative real estate marketing assistant.\n\
         Generate a compelling and attractive property description for a real estate listing.\n\
         The property is part of the '{project}' development.\n\
         \n\
         Unit Details:\n\
         {details}\n\
         \n\
         Highlight its unique selling points and appeal to potential buyers (e.g., families, investors, young professionals, luxury seekers).\n\
         Keep the description concise, engaging, and around 100-150 words.\n\
         Focus on creating an inviting and desirable image of the property.\n\
         Do not use markdown formatting in your response.",
        project = unit.project_name,
        details = details.join("\n"),
    )
}

pub fn contract_analysis_prompt(query: &str) -> String {
    format!(
        "Analyze the following document based on this query: \"{}\". \
         Provide a concise summary or answer based directly on the document's content. \
         Focus on extracting relevant information accurately. \
         Do not use markdown formatting in your response.",
        query
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_platform_data, GenerationOptions, Sampler};
    use crate::platform::AreaBreakdownItem;
    use chrono::NaiveDate;

    fn unit() -> PopulatedUnitDetail {
        let options = GenerationOptions {
            project_count: 1,
            reference_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
        };
        let data = generate_platform_data(&options, &mut Sampler::seeded(8)).expect("dataset");
        let unit = data.units().next().cloned().expect("at least one unit");
        unit
    }

    #[test]
    fn studio_units_without_extras_use_fallback_copy() {
        let mut unit = unit();
        unit.bedrooms = None;
        unit.unit_features.clear();
        unit.view = None;
        unit.customization_notes = None;
        unit.area_breakdown.clear();

        let prompt = property_description_prompt(&unit);
        assert!(prompt.contains(&format!("'{}' development", unit.project_name)));
        assert!(prompt.contains("- Type: Studio unit"));
        assert!(prompt.contains("- Key Features: standard amenities"));
        assert!(prompt.contains("- View: not specified"));
        assert!(!prompt.contains("Customization Notes"));
        assert!(!prompt.contains("Layout includes"));
    }

    #[test]
    fn layout_and_notes_are_listed_when_present() {
        let mut unit = unit();
        unit.bedrooms = Some(3);
        unit.customization_notes = Some("Open kitchen".to_string());
        unit.area_breakdown = vec![
            AreaBreakdownItem {
                room_name: "Living Room".to_string(),
                area_sqft: 300,
            },
            AreaBreakdownItem {
                room_name: "Balcony".to_string(),
                area_sqft: 80,
            },
        ];

        let prompt = property_description_prompt(&unit);
        assert!(prompt.contains("- Type: 3 bedroom unit"));
        assert!(prompt.contains("- Customization Notes: Open kitchen"));
        assert!(prompt.contains("- Layout includes: Living Room, Balcony"));
    }

    #[test]
    fn contract_prompt_quotes_the_question() {
        let prompt = contract_analysis_prompt("What is the handover date?");
        assert!(prompt.starts_with(
            "Analyze the following document based on this query: \"What is the handover date?\"."
        ));
    }
}
