// Text templates for the summary and cover-letter generators.
// Placeholders are `{name}` and are filled with `fill_template`.

/// Fresh graduates. `{experience}` is either empty or a sentence ending in ". ".
pub const FRESHER_SUMMARY_TEMPLATE: &str = "Recent {degree} graduate in {field} from {school} with {skills}. \
{practice} {experience}Seeking to leverage academic knowledge and practical skills to contribute to \
innovative projects and grow professionally in a dynamic technology environment.";

/// Experienced and senior professionals.
pub const EXPERIENCED_SUMMARY_TEMPLATE: &str = "{level} {role} with {years} years of expertise in {skills}. \
{track_record} across {industry}. {focus} {projects}continuous improvement. \
Seeking to leverage extensive experience and technical expertise to drive innovation and mentor \
emerging talent in a challenging {target} role.";

pub const CAREER_CHANGE_SUMMARY_TEMPLATE: &str = "Motivated professional transitioning from {previous} to technology, \
bringing {transferable} and a fresh perspective. {learning}. \
{background}Eager to apply diverse background and newly acquired technical skills to contribute \
meaningfully to innovative technology solutions.";

/// Used before a category is chosen. `{credentials}` and `{projects}` are empty or end in ". ".
pub const DEFAULT_SUMMARY_TEMPLATE: &str = "Dedicated {role} with expertise in {skills}. {credentials}{projects}\
Seeking to leverage skills and experience to drive innovation and contribute to \
organizational success in a challenging role.";

pub const COVER_LETTER_TEMPLATE: &str = "Dear {hiring_manager},

{opening} {background}, {pitch}.

{alignment}

Key highlights of my qualifications include:
{highlights}

{closing}

Sincerely,
{name}";

pub const DEFAULT_HIRING_MANAGER: &str = "Hiring Manager";
pub const PLACEHOLDER_NAME: &str = "Your Name";

/// Fallback highlights when the resume has nothing to quote.
pub const GENERIC_HIGHLIGHTS: &[&str] = &[
    "Proven ability to deliver projects on time with cross-functional teams",
    "Strong background in agile methodologies and continuous integration",
    "Experience with modern web technologies and cloud platforms",
];

/// Fills `{key}` placeholders in a single left-to-right pass. Inserted values
/// are never rescanned, so braces inside user text come through verbatim.
/// Unknown placeholders are left as written.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after
            .find('}')
            .and_then(|close| {
                let key = &after[..close];
                values
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| (*v, close))
            });
        match value {
            Some((v, close)) => {
                out.push_str(v);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_known_keys() {
        let out = fill_template("Hi {name}, welcome to {company}.", &[("name", "Ada"), ("company", "Acme")]);
        assert_eq!(out, "Hi Ada, welcome to Acme.");
    }

    #[test]
    fn test_inserted_values_are_not_rescanned() {
        let out = fill_template("{a} and {b}", &[("a", "{b}"), ("b", "x")]);
        assert_eq!(out, "{b} and x");
    }

    #[test]
    fn test_unknown_and_unclosed_placeholders_kept() {
        assert_eq!(fill_template("{missing} {open", &[("x", "y")]), "{missing} {open");
    }
}
