use vakfinder_core::{Company, CompanyFilter, Error};

/// Drop candidates the store returned although they fail `filter`.
///
/// Well-behaved stores never trigger this; a violation is logged so the
/// offending backend can be investigated, and the company is not shown.
pub(crate) fn retain_matching(filter: &CompanyFilter, candidates: Vec<Company>) -> Vec<Company> {
    candidates
        .into_iter()
        .filter(|company| match filter.first_violation(company) {
            None => true,
            Some(condition) => {
                let violation = Error::InvariantViolation {
                    id: company.id.clone(),
                    reason: format!("store returned a candidate failing {condition:?}"),
                };
                tracing::warn!(error = %violation, "dropping candidate");
                false
            }
        })
        .collect()
}
