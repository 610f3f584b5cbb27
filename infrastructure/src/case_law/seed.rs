//! Built-in catalogue used when no `case_law.catalog_path` is configured.

use legalai_domain::{CaseLaw, CaseStatus};

#[allow(clippy::too_many_arguments)]
fn case(
    id: u32,
    title: &str,
    citation: &str,
    date: &str,
    summary: &str,
    status: CaseStatus,
    judges: &[&str],
    subjects: &[&str],
) -> CaseLaw {
    CaseLaw {
        id,
        title: title.to_string(),
        citation: citation.to_string(),
        court: "Supreme Court of India".to_string(),
        date: date.to_string(),
        summary: summary.to_string(),
        status,
        judges: judges.iter().map(|s| s.to_string()).collect(),
        subjects: subjects.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn seed_cases() -> Vec<CaseLaw> {
    vec![
        case(
            1,
            "Kesavananda Bharati vs. State of Kerala",
            "AIR 1973 SC 1461",
            "24/04/1973",
            "Established the basic structure doctrine of the Indian Constitution.",
            CaseStatus::Landmark,
            &["S.M. Sikri", "H.R. Khanna"],
            &["Constitutional Law", "Amendment"],
        ),
        case(
            2,
            "Maneka Gandhi vs. Union of India",
            "AIR 1978 SC 597",
            "25/01/1978",
            "Widened the interpretation of Article 21, introducing due process.",
            CaseStatus::Landmark,
            &["M.H. Beg", "P.N. Bhagwati"],
            &["Constitutional Law", "Personal Liberty"],
        ),
        case(
            3,
            "Shayara Bano vs. Union of India",
            "(2017) 9 SCC 1",
            "22/08/2017",
            "Declared the practice of Triple Talaq unconstitutional.",
            CaseStatus::Recent,
            &["J.S. Khehar", "R.F. Nariman"],
            &["Family Law", "Constitutional Law"],
        ),
        case(
            4,
            "Justice K.S. Puttaswamy (Retd.) vs. Union of India",
            "(2017) 10 SCC 1",
            "24/08/2017",
            "Affirmed the right to privacy as a fundamental right.",
            CaseStatus::Landmark,
            &["J.S. Khehar", "D.Y. Chandrachud"],
            &["Constitutional Law", "Privacy"],
        ),
    ]
}
