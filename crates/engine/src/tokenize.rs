/// Split an action into parts at case transitions and around asterisks.
///
/// A new part starts:
/// - at a lowercase → uppercase transition (`GetObject` → `Get`, `Object`)
/// - at the last capital of an uppercase run followed by lowercase (`XMLParser` → `XML`, `Parser`)
/// - on both sides of every `*`
///
/// Concatenating the parts gives back the input.
pub fn split_action_into_parts(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut parts = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 && starts_new_part(chars[i - 1], ch, chars.get(i + 1).copied()) {
            parts.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    parts.push(current);

    parts
}

fn starts_new_part(prev: char, ch: char, next: Option<char>) -> bool {
    if prev == '*' || ch == '*' {
        return true;
    }
    if prev.is_ascii_lowercase() && ch.is_ascii_uppercase() {
        return true;
    }
    prev.is_ascii_uppercase()
        && ch.is_ascii_uppercase()
        && next.is_some_and(|next| next.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn splits_by_capital_letters() {
        assert_eq!(
            split_action_into_parts("CreateAccessPointForObjectLambda"),
            vec!["Create", "Access", "Point", "For", "Object", "Lambda"]
        );
    }

    #[test]
    fn splits_by_asterisks() {
        assert_eq!(
            split_action_into_parts("*ObjectTagging*"),
            vec!["*", "Object", "Tagging", "*"]
        );
        assert_eq!(split_action_into_parts("Get**"), vec!["Get", "*", "*"]);
    }

    #[test]
    fn keeps_acronyms_together() {
        assert_eq!(split_action_into_parts("GET"), vec!["GET"]);
        assert_eq!(
            split_action_into_parts("GetSAMLProvider"),
            vec!["Get", "SAML", "Provider"]
        );
    }

    #[test]
    fn digits_do_not_start_a_new_part() {
        assert_eq!(
            split_action_into_parts("DescribeEc2Instances"),
            vec!["Describe", "Ec2Instances"]
        );
    }

    #[test]
    fn empty_input_is_a_single_empty_part() {
        assert_eq!(split_action_into_parts(""), vec![""]);
    }

    proptest! {
        #[test]
        fn parts_reconstruct_input(input in "[A-Za-z0-9*]{1,32}") {
            let parts = split_action_into_parts(&input);
            prop_assert_eq!(parts.concat(), input);
            prop_assert!(parts.iter().all(|part| !part.is_empty()));
        }
    }
}
