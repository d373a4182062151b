//! Built-in sample catalog for the demo CLI.
//!
//! All data in this module is hardcoded and fictional: the prevalences,
//! odds ratios, and coordinates are plausible but invented. This catalog
//! stands in for a real population dataset so the demo runs without any
//! external data file.

/// A small disease catalog covering the four categories the engine
/// distinguishes, with enough associations to exercise the comorbidity
/// stage and at least one disease that clears the pull-vector threshold.
pub const SAMPLE_CATALOG: &str = r#"
[[diseases]]
id = 1
code = "E11"
name = "Type 2 diabetes mellitus"
prevalence_male = 0.092
prevalence_female = 0.078
prevalence_total = 0.085
coordinate = { x = 0.52, y = -0.31, z = 0.64 }

[[diseases]]
id = 2
code = "E78"
name = "Disorders of lipoprotein metabolism"
prevalence_male = 0.13
prevalence_female = 0.11
prevalence_total = 0.12
coordinate = { x = 0.44, y = -0.22, z = 0.51 }

[[diseases]]
id = 3
code = "I10"
name = "Essential hypertension"
prevalence_male = 0.21
prevalence_female = 0.19
prevalence_total = 0.2
coordinate = { x = -0.18, y = 0.41, z = -0.09 }

[[diseases]]
id = 4
code = "I25"
name = "Chronic ischaemic heart disease"
prevalence_male = 0.065
prevalence_female = 0.041
prevalence_total = 0.053
coordinate = { x = -0.25, y = 0.36, z = -0.17 }

[[diseases]]
id = 5
code = "J44"
name = "Chronic obstructive pulmonary disease"
prevalence_male = 0.048
prevalence_female = 0.039
prevalence_total = 0.044
coordinate = { x = 0.07, y = 0.58, z = 0.33 }

[[diseases]]
id = 6
code = "J45"
name = "Asthma"
prevalence_male = 0.051
prevalence_female = 0.063
prevalence_total = 0.057
coordinate = { x = 0.11, y = 0.62, z = 0.29 }

[[diseases]]
id = 7
code = "N18"
name = "Chronic kidney disease"
prevalence_male = 0.034
prevalence_female = 0.03
prevalence_total = 0.032
coordinate = { x = -0.41, y = -0.12, z = 0.22 }

[[diseases]]
id = 8
code = "K76"
name = "Fatty (change of) liver"
prevalence_male = 0.059
prevalence_female = 0.044
prevalence_total = 0.051
coordinate = { x = 0.31, y = -0.44, z = 0.18 }

[[associations]]
disease_1 = 1
disease_2 = 3
odds_ratio = 3.5
p_value = 0.0001
patient_count = 18200

[[associations]]
disease_1 = 1
disease_2 = 7
odds_ratio = 4.2
p_value = 0.0003
patient_count = 6100

[[associations]]
disease_1 = 1
disease_2 = 2
odds_ratio = 2.8
p_value = 0.0001
patient_count = 15400

[[associations]]
disease_1 = 1
disease_2 = 8
odds_ratio = 3.1
p_value = 0.002
patient_count = 4300

[[associations]]
disease_1 = 3
disease_2 = 4
odds_ratio = 2.9
p_value = 0.0001
patient_count = 9800

[[associations]]
disease_1 = 3
disease_2 = 7
odds_ratio = 2.4
p_value = 0.001
patient_count = 5200

[[associations]]
disease_1 = 6
disease_2 = 5
odds_ratio = 2.2
p_value = 0.004
patient_count = 2700
"#;
