pub mod badges;
pub mod handlers;
