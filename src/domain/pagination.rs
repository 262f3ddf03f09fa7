use serde::Serialize;

/// Read-only view of a paginated result set, as pagination templates see it.
///
/// The renderer never calls these methods: it forwards whatever pagination
/// value it is given. The trait names the fields the bundled template reads so
/// that a pagination library can expose them through [`PaginationSnapshot`].
/// Page numbers are 1-based and computed by the implementor.
pub trait PaginationView {
    fn current_page_number(&self) -> u64;

    fn total_number_of_pages(&self) -> u64;

    fn total_number_of_items(&self) -> u64;

    fn items_per_page(&self) -> u64;

    /// Page numbers to show as direct links around the current page.
    fn pages_in_range(&self) -> Vec<u64>;

    fn first_page_number(&self) -> u64;

    fn last_page_number(&self) -> u64;

    /// `None` on the first page.
    fn previous_page_number(&self) -> Option<u64>;

    /// `None` on the last page.
    fn next_page_number(&self) -> Option<u64>;
}

/// Serializable copy of a [`PaginationView`], keyed the way templates
/// address it (`pagination.currentPageNumber`, `pagination.pagesInRange`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationSnapshot {
    pub current_page_number: u64,
    pub total_number_of_pages: u64,
    pub total_number_of_items: u64,
    pub items_per_page: u64,
    pub first_page_number: u64,
    pub last_page_number: u64,
    pub previous_page_number: Option<u64>,
    pub next_page_number: Option<u64>,
    pub pages_in_range: Vec<u64>,
}

impl PaginationSnapshot {
    pub fn of<V: PaginationView + ?Sized>(view: &V) -> Self {
        Self {
            current_page_number: view.current_page_number(),
            total_number_of_pages: view.total_number_of_pages(),
            total_number_of_items: view.total_number_of_items(),
            items_per_page: view.items_per_page(),
            first_page_number: view.first_page_number(),
            last_page_number: view.last_page_number(),
            previous_page_number: view.previous_page_number(),
            next_page_number: view.next_page_number(),
            pages_in_range: view.pages_in_range(),
        }
    }
}
