//! Embedded reference data: the make list, per-make fallback models and the
//! option ladders offered by the quote form.

use crate::domain::model::{CoverageType, VehicleMake, VehicleModel};
use serde::Serialize;

/// Makes offered by the form, already in alphabetical order.
const MAKES: &[(u32, &str)] = &[
    (1, "Acura"),
    (2, "Audi"),
    (3, "BMW"),
    (4, "Buick"),
    (5, "Cadillac"),
    (6, "Chevrolet"),
    (7, "Chrysler"),
    (8, "Dodge"),
    (9, "Ford"),
    (10, "GMC"),
    (11, "Honda"),
    (12, "Hyundai"),
    (13, "Infiniti"),
    (14, "Jeep"),
    (15, "Kia"),
    (16, "Lexus"),
    (17, "Lincoln"),
    (18, "Mazda"),
    (19, "Mercedes-Benz"),
    (20, "Mitsubishi"),
    (21, "Nissan"),
    (22, "Porsche"),
    (23, "Subaru"),
    (24, "Tesla"),
    (25, "Toyota"),
    (26, "Volkswagen"),
    (27, "Volvo"),
];

type ModelTable = &'static [(u32, &'static str)];

const FALLBACK_MODELS: &[(&str, ModelTable)] = &[
    ("Acura", &[(101, "TLX"), (102, "MDX"), (103, "RDX"), (104, "ILX"), (105, "NSX")]),
    ("Audi", &[(111, "A4"), (112, "Q5"), (113, "A6"), (114, "Q7"), (115, "A3"), (116, "Q3")]),
    (
        "BMW",
        &[(121, "3 Series"), (122, "5 Series"), (123, "X3"), (124, "X5"), (125, "X1"), (126, "7 Series")],
    ),
    (
        "Buick",
        &[(131, "Enclave"), (132, "Encore"), (133, "Envision"), (134, "LaCrosse"), (135, "Regal")],
    ),
    ("Cadillac", &[(141, "Escalade"), (142, "XT5"), (143, "CT5"), (144, "XT4"), (145, "CT4")]),
    (
        "Chevrolet",
        &[
            (151, "Silverado 1500"),
            (152, "Equinox"),
            (153, "Malibu"),
            (154, "Traverse"),
            (155, "Tahoe"),
            (156, "Camaro"),
        ],
    ),
    ("Chrysler", &[(161, "Pacifica"), (162, "300"), (163, "Voyager"), (164, "Aspen")]),
    (
        "Dodge",
        &[(171, "Charger"), (172, "Challenger"), (173, "Durango"), (174, "Journey"), (175, "Grand Caravan")],
    ),
    (
        "Ford",
        &[(181, "F-150"), (182, "Explorer"), (183, "Escape"), (184, "Mustang"), (185, "Edge"), (186, "Bronco")],
    ),
    ("GMC", &[(191, "Sierra 1500"), (192, "Acadia"), (193, "Terrain"), (194, "Yukon"), (195, "Canyon")]),
    (
        "Honda",
        &[(201, "Accord"), (202, "Civic"), (203, "CR-V"), (204, "Pilot"), (205, "Odyssey"), (206, "HR-V")],
    ),
    (
        "Hyundai",
        &[(211, "Elantra"), (212, "Tucson"), (213, "Santa Fe"), (214, "Sonata"), (215, "Palisade"), (216, "Kona")],
    ),
    ("Infiniti", &[(221, "Q50"), (222, "QX60"), (223, "QX80"), (224, "Q60"), (225, "QX50")]),
    (
        "Jeep",
        &[
            (231, "Grand Cherokee"),
            (232, "Wrangler"),
            (233, "Cherokee"),
            (234, "Compass"),
            (235, "Renegade"),
            (236, "Gladiator"),
        ],
    ),
    (
        "Kia",
        &[(241, "Optima"), (242, "Sorento"), (243, "Forte"), (244, "Soul"), (245, "Sportage"), (246, "Telluride")],
    ),
    ("Lexus", &[(251, "RX"), (252, "ES"), (253, "NX"), (254, "GX"), (255, "LX"), (256, "IS")]),
    (
        "Lincoln",
        &[(261, "Navigator"), (262, "Aviator"), (263, "Corsair"), (264, "Nautilus"), (265, "Continental")],
    ),
    (
        "Mazda",
        &[(271, "CX-5"), (272, "Mazda3"), (273, "CX-9"), (274, "Mazda6"), (275, "MX-5 Miata"), (276, "CX-30")],
    ),
    (
        "Mercedes-Benz",
        &[(281, "C-Class"), (282, "E-Class"), (283, "GLE"), (284, "GLC"), (285, "A-Class"), (286, "S-Class")],
    ),
    (
        "Mitsubishi",
        &[(291, "Outlander"), (292, "Eclipse Cross"), (293, "Mirage"), (294, "Pajero"), (295, "Lancer")],
    ),
    (
        "Nissan",
        &[(301, "Altima"), (302, "Rogue"), (303, "Sentra"), (304, "Pathfinder"), (305, "Murano"), (306, "Frontier")],
    ),
    (
        "Porsche",
        &[(311, "Cayenne"), (312, "911"), (313, "Macan"), (314, "Panamera"), (315, "Taycan"), (316, "Boxster")],
    ),
    (
        "Subaru",
        &[(321, "Outback"), (322, "Forester"), (323, "Impreza"), (324, "Crosstrek"), (325, "Ascent"), (326, "Legacy")],
    ),
    (
        "Tesla",
        &[(331, "Model 3"), (332, "Model Y"), (333, "Model S"), (334, "Model X"), (335, "Cybertruck")],
    ),
    (
        "Toyota",
        &[(341, "Camry"), (342, "Corolla"), (343, "RAV4"), (344, "Highlander"), (345, "Prius"), (346, "Tacoma")],
    ),
    (
        "Volkswagen",
        &[(351, "Jetta"), (352, "Tiguan"), (353, "Passat"), (354, "Atlas"), (355, "Golf"), (356, "Arteon")],
    ),
    ("Volvo", &[(361, "XC90"), (362, "XC60"), (363, "S60"), (364, "XC40"), (365, "V90"), (366, "S90")]),
];

const PLACEHOLDER_MODELS: ModelTable = &[(999, "Standard"), (998, "Deluxe"), (997, "Premium")];

/// How far back the model-year picker goes.
pub const MODEL_YEAR_SPAN: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LadderOption {
    pub value: u32,
    pub label: &'static str,
}

pub const LIABILITY_LIMITS: [LadderOption; 5] = [
    LadderOption { value: 25_000, label: "$25,000" },
    LadderOption { value: 50_000, label: "$50,000" },
    LadderOption { value: 100_000, label: "$100,000" },
    LadderOption { value: 250_000, label: "$250,000" },
    LadderOption { value: 500_000, label: "$500,000" },
];

pub const DEDUCTIBLE_OPTIONS: [LadderOption; 4] = [
    LadderOption { value: 250, label: "$250" },
    LadderOption { value: 500, label: "$500" },
    LadderOption { value: 1_000, label: "$1,000" },
    LadderOption { value: 2_000, label: "$2,000" },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageOption {
    pub coverage_type: CoverageType,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub fn coverage_options() -> Vec<CoverageOption> {
    vec![
        CoverageOption {
            coverage_type: CoverageType::Liability,
            name: "Liability Only",
            description: "Basic coverage required by law. Covers damage you cause to others.",
            features: &["Bodily injury liability", "Property damage liability"],
        },
        CoverageOption {
            coverage_type: CoverageType::Standard,
            name: "Standard Coverage",
            description: "Good protection including collision and comprehensive coverage.",
            features: &[
                "Bodily injury liability",
                "Property damage liability",
                "Collision coverage",
                "Comprehensive coverage",
            ],
        },
        CoverageOption {
            coverage_type: CoverageType::Full,
            name: "Full Coverage",
            description: "Maximum protection with all available coverage options.",
            features: &[
                "Bodily injury liability",
                "Property damage liability",
                "Collision coverage",
                "Comprehensive coverage",
                "Personal injury protection",
                "Uninsured motorist coverage",
            ],
        },
    ]
}

pub fn makes() -> Vec<VehicleMake> {
    MAKES
        .iter()
        .map(|&(id, name)| VehicleMake {
            id,
            name: name.to_string(),
        })
        .collect()
}

pub fn find_make(make_id: u32) -> Option<VehicleMake> {
    MAKES
        .iter()
        .find(|(id, _)| *id == make_id)
        .map(|&(id, name)| VehicleMake {
            id,
            name: name.to_string(),
        })
}

/// Static model list for a make, or the generic placeholder trio when the
/// make has no list of its own. Returned in table order, not normalised.
pub fn fallback_models(make_name: &str) -> Vec<VehicleModel> {
    let table = FALLBACK_MODELS
        .iter()
        .find(|(make, _)| *make == make_name)
        .map(|(_, models)| *models)
        .unwrap_or(PLACEHOLDER_MODELS);

    table
        .iter()
        .map(|&(id, name)| VehicleModel {
            id,
            name: name.to_string(),
            make_name: make_name.to_string(),
        })
        .collect()
}

/// Model years offered by the form, newest first.
pub fn vehicle_years(current_year: i32) -> Vec<i32> {
    (current_year - MODEL_YEAR_SPAN..=current_year).rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vehicle_cache::compare_names;
    use std::cmp::Ordering;

    #[test]
    fn test_makes_are_sorted_and_unique() {
        let makes = makes();
        assert_eq!(makes.len(), 27);
        for pair in makes.windows(2) {
            assert_eq!(compare_names(&pair[0].name, &pair[1].name), Ordering::Less);
        }
    }

    #[test]
    fn test_every_make_has_fallback_models() {
        for make in makes() {
            let models = fallback_models(&make.name);
            assert!(models.len() >= 4, "{} has too few fallback models", make.name);
            assert!(models.iter().all(|m| m.make_name == make.name));
        }
    }

    #[test]
    fn test_unlisted_make_gets_placeholder_models() {
        let models = fallback_models("Ferrari");
        let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Standard", "Deluxe", "Premium"]);
        assert_eq!(models[0].make_name, "Ferrari");
    }

    #[test]
    fn test_find_make() {
        assert_eq!(find_make(25).unwrap().name, "Toyota");
        assert!(find_make(0).is_none());
        assert!(find_make(28).is_none());
    }

    #[test]
    fn test_vehicle_years_cover_thirty_years_back() {
        let years = vehicle_years(2025);
        assert_eq!(years.len(), 31);
        assert_eq!(years.first(), Some(&2025));
        assert_eq!(years.last(), Some(&1995));
    }

    #[test]
    fn test_ladders_ascend() {
        assert!(LIABILITY_LIMITS.windows(2).all(|w| w[0].value < w[1].value));
        assert!(DEDUCTIBLE_OPTIONS.windows(2).all(|w| w[0].value < w[1].value));
        assert_eq!(coverage_options().len(), CoverageType::ALL.len());
    }
}
