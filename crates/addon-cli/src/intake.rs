//! Submission message parsing.
//!
//! Submissions arrive as free-form text: a subject line naming the pull
//! mechanism (`[git pull] ...`) and a body carrying one or more request
//! blocks. Each block names the addon, its version, the source URL, an
//! optional revision or tag, and the target platform versions, which
//! expand into one request per named branch.

use std::str::FromStr;
use std::sync::LazyLock;

use addon_command::PullKind;
use addon_policy::Branch;
use regex::Regex;

static PULL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[(\w+)[\s\-]*pull\]").expect("static regex"));

static REQUEST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?xm)
        ^[\s*]*addon[\s:=–-]*([\w.-]+)\s*
        ^[\s*]*version[\s:=–-]*([\d.]+)\s*
        ^[\s*]*url[\s:=–-]*([\w.@:/-]+)\s*
        (?:^[\s*]*(?:revision|tag)[\s:=–-]*([\w.-]+)\s*)?
        (?:[\s*]*branch[\s:=–-]*.*?\s*)?
        ^[\s*]*xbmc\s+version[\s:=–-]*([\w,/\ ]+)",
    )
    .expect("static regex")
});

/// One submission request for one target branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub addon_id: String,
    pub addon_version: String,
    pub url: String,
    pub revision: Option<String>,
    pub branch: Branch,
    pub pull_type: PullKind,
}

/// The pull mechanism named in a subject line, lowercased.
pub fn pull_kind_name(subject: &str) -> Option<String> {
    PULL_RE
        .captures(subject)
        .map(|caps| caps[1].to_lowercase())
}

/// Parse a submission message into pull requests.
///
/// An unknown pull mechanism or an unparseable body yields an empty list
/// with a warning; branch names outside the supported list are skipped
/// per request block.
pub fn parse_message(subject: &str, body: &str) -> Vec<PullRequest> {
    let Some(kind_name) = pull_kind_name(subject) else {
        tracing::warn!(subject, "unknown pull type, skipping");
        return Vec::new();
    };
    let pull_type = match PullKind::from_str(&kind_name) {
        Ok(kind) => kind,
        Err(e) => {
            tracing::warn!(subject, error = %e, "skipping");
            return Vec::new();
        }
    };

    let mut requests = Vec::new();
    for caps in REQUEST_RE.captures_iter(body) {
        let branches = caps[5].to_string();
        for name in branches
            .split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| !s.is_empty() && *s != "and")
        {
            let name = name.to_lowercase();
            let Ok(branch) = Branch::from_str(&name) else {
                tracing::warn!(branch = %name, "invalid xbmc version, skipping");
                continue;
            };
            requests.push(PullRequest {
                addon_id: caps[1].to_string(),
                addon_version: caps[2].to_string(),
                url: caps[3].to_string(),
                revision: caps.get(4).map(|m| m.as_str().to_string()),
                branch,
                pull_type,
            });
        }
    }

    if requests.is_empty() {
        tracing::warn!(subject, "no request found in message, skipping");
    } else {
        tracing::info!(subject, count = requests.len(), "parsed submission");
    }
    requests
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MESSAGE: &str = "\
[git pull] plugin.video.demo 1.2.0

addon: plugin.video.demo
version: 1.2.0
url: git://github.com/user/plugin.video.demo.git
revision: abc1234
xbmc version: frodo
";

    #[test]
    fn test_pull_kind_from_subject() {
        assert_eq!(pull_kind_name("[git pull] something"), Some("git".to_string()));
        assert_eq!(pull_kind_name("[SVN pull] x"), Some("svn".to_string()));
        assert_eq!(pull_kind_name("[zip-pull] x"), Some("zip".to_string()));
        assert_eq!(pull_kind_name("no marker here"), None);
    }

    #[test]
    fn test_parse_single_request() {
        let requests = parse_message(MESSAGE.lines().next().unwrap(), MESSAGE);
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.addon_id, "plugin.video.demo");
        assert_eq!(request.addon_version, "1.2.0");
        assert_eq!(request.url, "git://github.com/user/plugin.video.demo.git");
        assert_eq!(request.revision.as_deref(), Some("abc1234"));
        assert_eq!(request.branch, Branch::Frodo);
        assert_eq!(request.pull_type, PullKind::Git);
    }

    #[test]
    fn test_branch_list_expands_to_multiple_requests() {
        let message = "\
[git pull] x

addon: plugin.video.demo
version: 1.2.0
url: git://example.com/repo.git
xbmc version: frodo and gotham
";
        let requests = parse_message("[git pull] x", message);
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].branch, Branch::Frodo);
        assert_eq!(requests[1].branch, Branch::Gotham);
        assert_eq!(requests[0].revision, None);
    }

    #[test]
    fn test_unsupported_branch_skipped() {
        let message = "\
addon: plugin.video.demo
version: 1.0.0
url: git://example.com/repo.git
xbmc version: helix, gotham
";
        let requests = parse_message("[git pull] x", message);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].branch, Branch::Gotham);
    }

    #[test]
    fn test_unknown_pull_type_yields_nothing() {
        assert!(parse_message("[cvs pull] x", MESSAGE).is_empty());
        assert!(parse_message("hello", MESSAGE).is_empty());
    }

    #[test]
    fn test_bulleted_mail_style_fields() {
        let message = "\
 * addon: script.module.demo
 * version: 0.5.1
 * url: http://example.com/demo.zip
 * xbmc version: eden
";
        let requests = parse_message("[zip pull] demo", message);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].addon_id, "script.module.demo");
        assert_eq!(requests[0].pull_type, PullKind::Zip);
        assert_eq!(requests[0].branch, Branch::Eden);
    }

    #[test]
    fn test_tag_accepted_as_revision() {
        let message = "\
addon: plugin.video.demo
version: 1.0.0
url: git://example.com/repo.git
tag: v1.0.0
xbmc version: frodo
";
        let requests = parse_message("[git pull] x", message);
        assert_eq!(requests[0].revision.as_deref(), Some("v1.0.0"));
    }
}
