pub mod portfolio_repository;
