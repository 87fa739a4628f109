// アプリケーション層モジュール
pub mod category_list_handler;
pub mod ranking_handler;
pub mod response;

// 再エクスポート
pub use category_list_handler::CategoryListHandler;
pub use ranking_handler::RankingHandler;
