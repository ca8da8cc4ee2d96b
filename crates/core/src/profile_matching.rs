//! Linking newly registered accounts to pre-imported fencer profiles.
//!
//! Club administrators import fencers (name, e-mail) before the fencers
//! create accounts. When someone registers, an unlinked profile is claimed
//! if it identifies them unambiguously; otherwise a fresh profile is made.

use crate::types::DbId;

/// An unlinked fencer profile considered during registration.
#[derive(Debug, Clone)]
pub struct ProfileCandidate {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Identity details supplied by the registrant.
#[derive(Debug, Clone)]
pub struct Registrant<'a> {
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

/// How the registrant's profile should be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMatch {
    /// Exactly one unlinked profile shares the e-mail address.
    ByEmail(DbId),
    /// Exactly one unlinked profile shares both first and last name.
    ByName(DbId),
    /// No unambiguous candidate; create a new profile.
    CreateNew,
}

impl ProfileMatch {
    /// The profile to link, if any.
    pub fn profile_id(self) -> Option<DbId> {
        match self {
            ProfileMatch::ByEmail(id) | ProfileMatch::ByName(id) => Some(id),
            ProfileMatch::CreateNew => None,
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn single<I: Iterator<Item = DbId>>(mut ids: I) -> Option<DbId> {
    let first = ids.next()?;
    match ids.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// Decide which unlinked profile (if any) belongs to the registrant.
///
/// E-mail is checked first, then the full name. Blank values never match
/// and an ambiguous match on one key falls through to the next.
pub fn match_profile(candidates: &[ProfileCandidate], registrant: &Registrant<'_>) -> ProfileMatch {
    let email = normalize(registrant.email);
    if !email.is_empty() {
        let hits = candidates
            .iter()
            .filter(|c| normalize(&c.email) == email)
            .map(|c| c.id);
        if let Some(id) = single(hits) {
            return ProfileMatch::ByEmail(id);
        }
    }

    let first = normalize(registrant.first_name);
    let last = normalize(registrant.last_name);
    if !first.is_empty() && !last.is_empty() {
        let hits = candidates
            .iter()
            .filter(|c| normalize(&c.first_name) == first && normalize(&c.last_name) == last)
            .map(|c| c.id);
        if let Some(id) = single(hits) {
            return ProfileMatch::ByName(id);
        }
    }

    ProfileMatch::CreateNew
}

/// Name shown for a fencer across the pages.
///
/// Prefers the linked account's full name, then its username, then the
/// profile's own name fields, and finally `Profil #<id>`.
pub fn fencer_display_name(
    profile_id: DbId,
    account: Option<(&str, &str, &str)>,
    profile_first_name: &str,
    profile_last_name: &str,
) -> String {
    if let Some((username, first, last)) = account {
        let full = format!("{} {}", first.trim(), last.trim()).trim().to_string();
        if !full.is_empty() {
            return full;
        }
        if !username.trim().is_empty() {
            return username.to_string();
        }
    }
    let own = format!("{} {}", profile_first_name.trim(), profile_last_name.trim())
        .trim()
        .to_string();
    if !own.is_empty() {
        return own;
    }
    format!("Profil #{profile_id}")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn candidate(id: DbId, first: &str, last: &str, email: &str) -> ProfileCandidate {
        ProfileCandidate {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
        }
    }

    fn registrant<'a>(email: &'a str, first: &'a str, last: &'a str) -> Registrant<'a> {
        Registrant {
            email,
            first_name: first,
            last_name: last,
        }
    }

    #[test]
    fn email_match_is_case_insensitive() {
        let candidates = vec![candidate(4, "Jana", "Nováková", "Jana.Novakova@Example.cz")];
        let outcome = match_profile(
            &candidates,
            &registrant(" jana.novakova@example.cz ", "", ""),
        );
        assert_eq!(outcome, ProfileMatch::ByEmail(4));
    }

    #[test]
    fn email_takes_precedence_over_name() {
        let candidates = vec![
            candidate(1, "Petr", "Svoboda", ""),
            candidate(2, "Someone", "Else", "petr@example.cz"),
        ];
        let outcome = match_profile(&candidates, &registrant("petr@example.cz", "Petr", "Svoboda"));
        assert_eq!(outcome, ProfileMatch::ByEmail(2));
    }

    #[test]
    fn falls_back_to_full_name() {
        let candidates = vec![candidate(9, "Petr", "Svoboda", "")];
        let outcome = match_profile(&candidates, &registrant("new@example.cz", "petr", "SVOBODA"));
        assert_eq!(outcome, ProfileMatch::ByName(9));
    }

    #[test]
    fn ambiguous_name_creates_new_profile() {
        let candidates = vec![
            candidate(1, "Petr", "Svoboda", ""),
            candidate(2, "Petr", "Svoboda", ""),
        ];
        let outcome = match_profile(&candidates, &registrant("", "Petr", "Svoboda"));
        assert_eq!(outcome, ProfileMatch::CreateNew);
    }

    #[test]
    fn ambiguous_email_falls_through_to_name() {
        let candidates = vec![
            candidate(1, "Eva", "Malá", "family@example.cz"),
            candidate(2, "Adam", "Malý", "family@example.cz"),
        ];
        let outcome = match_profile(&candidates, &registrant("family@example.cz", "Adam", "Malý"));
        assert_eq!(outcome, ProfileMatch::ByName(2));
    }

    #[test]
    fn blank_values_never_match() {
        let candidates = vec![candidate(1, "", "", "")];
        let outcome = match_profile(&candidates, &registrant("", "", ""));
        assert_matches!(outcome, ProfileMatch::CreateNew);
        assert_eq!(outcome.profile_id(), None);
    }

    #[test]
    fn partial_name_does_not_match() {
        let candidates = vec![candidate(1, "Petr", "Svoboda", "")];
        let outcome = match_profile(&candidates, &registrant("", "Petr", ""));
        assert_eq!(outcome, ProfileMatch::CreateNew);
    }

    // -- fencer_display_name -------------------------------------------------

    #[test]
    fn display_name_prefers_account_full_name() {
        let name = fencer_display_name(3, Some(("jnovak", "Jan", "Novák")), "J.", "N.");
        assert_eq!(name, "Jan Novák");
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let name = fencer_display_name(3, Some(("jnovak", "", "")), "", "");
        assert_eq!(name, "jnovak");
    }

    #[test]
    fn display_name_uses_profile_fields_when_unlinked() {
        assert_eq!(fencer_display_name(3, None, "Eva", ""), "Eva");
        assert_eq!(fencer_display_name(3, None, "", ""), "Profil #3");
    }
}
