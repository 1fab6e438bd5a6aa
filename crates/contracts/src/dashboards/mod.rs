pub mod d400_performance;
