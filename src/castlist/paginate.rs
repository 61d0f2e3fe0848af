//! Splits one tribe's members into fixed-size pages.
use super::layout::LayoutLimits;
use super::tribe::Member;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination<'a> {
    pub pages: Vec<Vec<&'a Member>>,
    pub total_pages: usize,
    pub page_size: usize,
}

impl<'a> Pagination<'a> {
    /// The page at `index`, clamped to the last page.
    pub fn page(&self, index: usize) -> &[&'a Member] {
        let last = self.total_pages.saturating_sub(1);
        self.pages
            .get(index.min(last))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Display-name order, case-insensitive; ids break ties so output never depends on
/// the order members were fetched in. Case folding is plain Unicode lowercase, not
/// locale collation.
pub fn compare_members(a: &Member, b: &Member) -> Ordering {
    a.display_name
        .to_lowercase()
        .cmp(&b.display_name.to_lowercase())
        .then_with(|| a.display_name.cmp(&b.display_name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Pages sized so each tribe block fits the page budget.
pub fn paginate<'a>(
    members: &'a [Member],
    use_separators: bool,
    limits: &LayoutLimits,
) -> Pagination<'a> {
    paginate_with_size(members, limits.effective_page_size(use_separators))
}

/// Sorts and slices into pages of `page_size` (0 is treated as 1). Zero members give
/// a single empty page.
pub fn paginate_with_size(members: &[Member], page_size: usize) -> Pagination<'_> {
    let page_size = page_size.max(1);
    let mut sorted: Vec<&Member> = members.iter().collect();
    sorted.sort_by(|a, b| compare_members(a, b));

    let pages: Vec<Vec<&Member>> = if sorted.is_empty() {
        vec![Vec::new()]
    } else {
        sorted.chunks(page_size).map(|chunk| chunk.to_vec()).collect()
    };
    Pagination {
        total_pages: pages.len(),
        pages,
        page_size,
    }
}
