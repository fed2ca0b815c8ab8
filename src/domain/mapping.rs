//! 브랜치 prefix → 템플릿 파일 매핑 규칙.
//!
//! 문법: `name1=pfx1,pfx2;name2=pfx3`. 선언 순서가 우선순위이며
//! 가장 먼저 일치한 규칙이 선택된다(가장 긴 prefix가 아님).

use std::collections::BTreeSet;

use crate::domain::error::TemplateError;

pub const TEMPLATE_EXTENSION: &str = ".md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRule {
    pub file: String,
    pub prefixes: Vec<String>,
}

impl MappingRule {
    /// 대소문자를 구분하는 단순 prefix 비교.
    pub fn matches(&self, branch: &str) -> bool {
        self.prefixes.iter().any(|p| branch.starts_with(p.as_str()))
    }
}

/// 파싱이 끝난 순서 있는 규칙 목록.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingRules {
    rules: Vec<MappingRule>,
}

impl MappingRules {
    /// mapping 문자열을 규칙 목록으로 파싱한다. 비어 있으면 규칙 없음.
    ///
    /// 템플릿 이름과 각 prefix의 앞뒤 공백은 제거된다(`A =foo`는 `A.md`로 해석).
    /// 빈 `;` 조각은 건너뛰고, 매칭 자체는 대소문자를 구분하는 그대로의 prefix 비교다.
    pub fn parse(raw: &str) -> Result<Self, TemplateError> {
        let mut rules = Vec::new();

        for segment in raw.split(';') {
            let segment = segment.trim();
            // 후행 `;`나 여러 줄 입력의 빈 조각은 무시한다.
            if segment.is_empty() {
                continue;
            }

            let Some((name, prefix_list)) = segment.split_once('=') else {
                return Err(malformed(segment, "expected `name=prefix[,prefix...]`"));
            };

            let file = name.trim();
            if file.is_empty() {
                return Err(malformed(segment, "template name is empty"));
            }

            let prefixes: Vec<String> = prefix_list
                .split(',')
                .map(|p| p.trim().to_string())
                .collect();
            if prefixes.iter().any(String::is_empty) {
                return Err(malformed(segment, "prefix list contains an empty entry"));
            }

            rules.push(MappingRule {
                file: file.to_string(),
                prefixes,
            });
        }

        Ok(Self { rules })
    }

    /// 선택 입력을 파싱한다. None/빈 문자열은 규칙 없음.
    pub fn parse_optional(raw: Option<&str>) -> Result<Self, TemplateError> {
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::parse(raw),
            _ => Ok(Self::default()),
        }
    }

    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 브랜치에 처음으로 일치하는 규칙.
    pub fn find(&self, branch: &str) -> Option<&MappingRule> {
        self.rules.iter().find(|rule| rule.matches(branch))
    }
}

fn malformed(rule: &str, reason: &'static str) -> TemplateError {
    TemplateError::MalformedMapping {
        rule: rule.to_string(),
        reason,
    }
}

/// 브랜치에 맞는 템플릿 파일명을 결정하고 존재 여부를 검증한다.
pub fn resolve_template(
    rules: &MappingRules,
    branch: &str,
    templates: &BTreeSet<String>,
    default_template: &str,
) -> Result<String, TemplateError> {
    let target = rules
        .find(branch)
        .map(|rule| rule.file.as_str())
        .unwrap_or(default_template);

    let filename = format!("{target}{TEMPLATE_EXTENSION}");
    if !templates.contains(&filename) {
        return Err(TemplateError::NotFound(filename));
    }
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templates(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn parses_rules_in_declaration_order() {
        let rules = MappingRules::parse("feature=feat/,feature/;bugfix=fix/").unwrap();
        assert_eq!(
            rules.rules(),
            &[
                MappingRule {
                    file: "feature".into(),
                    prefixes: vec!["feat/".into(), "feature/".into()],
                },
                MappingRule {
                    file: "bugfix".into(),
                    prefixes: vec!["fix/".into()],
                },
            ]
        );
    }

    #[test]
    fn splits_on_first_equals_only() {
        let rules = MappingRules::parse("odd=a=b").unwrap();
        assert_eq!(rules.rules()[0].prefixes, vec!["a=b".to_string()]);
    }

    #[test]
    fn tolerates_trailing_separator_and_whitespace() {
        let rules = MappingRules::parse(" feature = feat/ , feature/ ;\n bugfix=fix/;\n").unwrap();
        assert_eq!(rules.rules().len(), 2);
        assert_eq!(rules.rules()[0].file, "feature");
        assert_eq!(rules.rules()[0].prefixes, vec!["feat/", "feature/"]);
    }

    #[test]
    fn trimmed_name_resolves_without_padding() {
        let rules = MappingRules::parse("A =foo").unwrap();
        let set = templates(&["A.md", "default.md"]);
        assert_eq!(
            resolve_template(&rules, "foo-1", &set, "default").unwrap(),
            "A.md"
        );
    }

    #[test]
    fn rejects_rule_without_equals() {
        let err = MappingRules::parse("feature=feat/;bugfix").unwrap_err();
        assert_eq!(
            err,
            TemplateError::MalformedMapping {
                rule: "bugfix".into(),
                reason: "expected `name=prefix[,prefix...]`",
            }
        );
        assert!(err.to_string().contains("'bugfix'"));
    }

    #[test]
    fn rejects_empty_name_or_prefix() {
        assert!(matches!(
            MappingRules::parse("=feat/"),
            Err(TemplateError::MalformedMapping { .. })
        ));
        assert!(matches!(
            MappingRules::parse("feature="),
            Err(TemplateError::MalformedMapping { .. })
        ));
        assert!(matches!(
            MappingRules::parse("feature=feat/,,x"),
            Err(TemplateError::MalformedMapping { .. })
        ));
    }

    #[test]
    fn absent_or_blank_mapping_has_no_rules() {
        assert!(MappingRules::parse_optional(None).unwrap().is_empty());
        assert!(MappingRules::parse_optional(Some("")).unwrap().is_empty());
        assert!(MappingRules::parse_optional(Some("  ")).unwrap().is_empty());
    }

    #[test]
    fn first_declared_rule_wins_over_more_specific_prefix() {
        let rules = MappingRules::parse("A=foo;B=foobar").unwrap();
        let set = templates(&["A.md", "B.md", "default.md"]);
        assert_eq!(
            resolve_template(&rules, "foobar123", &set, "default").unwrap(),
            "A.md"
        );
    }

    #[test]
    fn any_prefix_of_a_rule_matches() {
        let rules = MappingRules::parse("feature=feat/,feature/;bugfix=fix/").unwrap();
        let set = templates(&["feature.md", "bugfix.md", "default.md"]);
        assert_eq!(
            resolve_template(&rules, "feature/login", &set, "default").unwrap(),
            "feature.md"
        );
        assert_eq!(
            resolve_template(&rules, "fix/crash", &set, "default").unwrap(),
            "bugfix.md"
        );
    }

    #[test]
    fn no_rules_falls_back_to_default() {
        let set = templates(&["default.md"]);
        assert_eq!(
            resolve_template(&MappingRules::default(), "anything", &set, "default").unwrap(),
            "default.md"
        );
    }

    #[test]
    fn unmatched_branch_falls_back_to_default() {
        let rules = MappingRules::parse("A=foo").unwrap();
        let set = templates(&["A.md", "default.md"]);
        assert_eq!(
            resolve_template(&rules, "barbaz", &set, "default").unwrap(),
            "default.md"
        );
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        let rules = MappingRules::parse("A=Feat/").unwrap();
        let set = templates(&["A.md", "default.md"]);
        assert_eq!(
            resolve_template(&rules, "feat/x", &set, "default").unwrap(),
            "default.md"
        );
    }

    #[test]
    fn missing_template_names_the_file() {
        let rules = MappingRules::parse("A=foo").unwrap();
        let set = templates(&["default.md"]);
        let err = resolve_template(&rules, "foo-1", &set, "default").unwrap_err();
        assert_eq!(err, TemplateError::NotFound("A.md".into()));
        assert_eq!(err.to_string(), "Could not find template: A.md!");
    }
}
