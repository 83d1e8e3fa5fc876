pub mod favourites;
pub mod lookup;
