//! Backward-compatibility shims for older hosts.
//!
//! Two leftovers the templates still call into:
//!
//! - a `<title>` composition path for hosts that predate native title-tag
//!   support (gated on the host version),
//! - author-archive bootstrapping, so author templates can render author
//!   data without rewinding the post loop.

/// Host user id.
pub type UserId = u64;

/// Inputs for legacy title composition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TitleContext<'a> {
    /// Site name, always appended.
    pub site_name: &'a str,
    /// Site tagline; shown on the home and front page only.
    pub site_description: Option<&'a str>,
    /// A feed request; the title passes through untouched.
    pub is_feed: bool,
    /// The blog posts listing.
    pub is_home: bool,
    /// The site front page.
    pub is_front_page: bool,
    /// Not-found (404); suppresses the page-number suffix.
    pub is_not_found: bool,
    /// Archive-style pagination counter (1-based, 0 when absent).
    pub paged: u32,
    /// In-post `<!--nextpage-->` pagination counter (1-based, 0 when absent).
    pub page: u32,
}

/// Whether the legacy title path should be active for this host version.
///
/// Hosts from 4.1 on declare title-tag support and render `<title>`
/// themselves.
pub fn needs_title_shim(host_version: &str) -> bool {
    version_lt(host_version, "4.1")
}

/// Compose a `<title>` string for hosts without native title-tag support.
///
/// Appends the site name to `existing`, then the tagline on the home/front
/// page, then a `Page N` suffix when paginated (either counter) and not on
/// a not-found page. Feed titles pass through unchanged.
pub fn compose_title(existing: &str, sep: &str, ctx: &TitleContext<'_>) -> String {
    if ctx.is_feed {
        return existing.to_string();
    }

    let mut title = String::from(existing);
    title.push_str(ctx.site_name);

    if let Some(description) = ctx.site_description
        && !description.is_empty()
        && (ctx.is_home || ctx.is_front_page)
    {
        title.push_str(&format!(" {sep} {description}"));
    }

    if (ctx.paged >= 2 || ctx.page >= 2) && !ctx.is_not_found {
        let n = ctx.paged.max(ctx.page);
        title.push_str(&format!(" {sep} Page {n}"));
    }

    title
}

/// What an author template needs to know about the current query.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorQuery {
    /// The request is an author archive.
    pub is_author: bool,
    /// Author of the query's first post, when the query found any.
    pub queried_post_author: Option<UserId>,
}

/// The author whose data an author-archive template should render.
///
/// `Some` only on an author archive that actually matched a post; templates
/// then skip the loop-rewind dance the host otherwise requires.
pub fn author_for_archive(query: &AuthorQuery) -> Option<UserId> {
    if query.is_author {
        query.queried_post_author
    } else {
        None
    }
}

/// Numeric comparison of dotted version strings, segment by segment.
///
/// Missing segments count as zero, so `"4.1" == "4.1.0"`. Non-numeric
/// trailing characters in a segment are ignored (`"4.1-beta1"` compares
/// as `4.1`).
fn version_lt(a: &str, b: &str) -> bool {
    let mut left = a.split('.').map(segment_value);
    let mut right = b.split('.').map(segment_value);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return false,
            (l, r) => {
                let l = l.unwrap_or(0);
                let r = r.unwrap_or(0);
                if l != r {
                    return l < r;
                }
            }
        }
    }
}

fn segment_value(segment: &str) -> u64 {
    let digits: &str = segment
        .split_once(|c: char| !c.is_ascii_digit())
        .map_or(segment, |(head, _)| head);
    digits.parse().unwrap_or(0)
}
