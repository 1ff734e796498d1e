pub mod home_page;
pub mod brewery_detail_page;
