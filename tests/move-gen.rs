//! Tests the move generator against published variation counts
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////

mod move_gen {
    use bitmove::chess::{variations, Position};

    mod start {
        use super::count;

        const FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 20); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 400); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 8902); }

        #[test]
        fn depth_4() { assert_eq!(count(FEN, 4), 197281); }

        #[test]
        #[ignore]
        fn depth_5() { assert_eq!(count(FEN, 5), 4865609); }
    }

    mod kiwipete {
        use super::count;

        const FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 48); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 2039); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 97862); }

        #[test]
        #[ignore]
        fn depth_4() { assert_eq!(count(FEN, 4), 4085603); }
    }

    mod rook_endgame {
        use super::count;

        const FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 14); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 191); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 2812); }

        #[test]
        fn depth_4() { assert_eq!(count(FEN, 4), 43238); }

        #[test]
        #[ignore]
        fn depth_5() { assert_eq!(count(FEN, 5), 674624); }
    }

    mod promotions {
        use super::count;

        const FEN: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
        const MIRRORED: &str = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";

        #[test]
        fn depth_1() {
            assert_eq!(count(FEN, 1), 6);
            assert_eq!(count(MIRRORED, 1), 6);
        }

        #[test]
        fn depth_2() {
            assert_eq!(count(FEN, 2), 264);
            assert_eq!(count(MIRRORED, 2), 264);
        }

        #[test]
        fn depth_3() {
            assert_eq!(count(FEN, 3), 9467);
            assert_eq!(count(MIRRORED, 3), 9467);
        }

        #[test]
        #[ignore]
        fn depth_4() { assert_eq!(count(FEN, 4), 422333); }
    }

    mod discovered_promotion {
        use super::count;

        const FEN: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 44); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 1486); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 62379); }

        #[test]
        #[ignore]
        fn depth_4() { assert_eq!(count(FEN, 4), 2103487); }
    }

    mod pawn_endings {
        use super::count;

        #[test]
        fn position_065() { assert_eq!(count("8/8/8/8/8/K7/P7/k7 w - - 0 1", 6), 6249); }

        #[test]
        fn position_066() { assert_eq!(count("8/8/8/8/8/7K/7P/7k w - - 0 1", 6), 6249); }

        #[test]
        fn position_067() { assert_eq!(count("K7/p7/k7/8/8/8/8/8 w - - 0 1", 6), 2343); }

        #[test]
        fn position_068() { assert_eq!(count("7K/7p/7k/8/8/8/8/8 w - - 0 1", 6), 2343); }

        #[test]
        fn position_069() { assert_eq!(count("8/2k1p3/3pP3/3P2K1/8/8/8/8 w - - 0 1", 6), 34834); }

        #[test]
        fn position_070() { assert_eq!(count("8/8/8/8/8/K7/P7/k7 b - - 0 1", 6), 2343); }

        #[test]
        fn position_072() { assert_eq!(count("K7/p7/k7/8/8/8/8/8 b - - 0 1", 6), 6249); }

        #[test]
        fn position_074() { assert_eq!(count("8/2k1p3/3pP3/3P2K1/8/8/8/8 b - - 0 1", 6), 34822); }

        #[test]
        fn position_075() { assert_eq!(count("8/8/8/8/8/4k3/4P3/4K3 w - - 0 1", 6), 11848); }

        #[test]
        fn position_076() { assert_eq!(count("4k3/4p3/4K3/8/8/8/8/8 b - - 0 1", 6), 11848); }

        #[test]
        fn position_077() { assert_eq!(count("8/8/7k/7p/7P/7K/8/8 w - - 0 1", 6), 10724); }

        #[test]
        fn position_078() { assert_eq!(count("8/8/k7/p7/P7/K7/8/8 w - - 0 1", 6), 10724); }

        #[test]
        fn position_082() { assert_eq!(count("k7/8/3p4/8/3P4/8/8/7K w - - 0 1", 6), 20960); }

        #[test]
        fn position_088() { assert_eq!(count("k7/8/3p4/8/3P4/8/8/7K b - - 0 1", 6), 21104); }

        #[test]
        fn position_089() { assert_eq!(count("7k/3p4/8/8/3P4/8/8/K7 w - - 0 1", 6), 32191); }
    }

    mod castling {
        use super::count;

        #[test]
        #[ignore]
        fn position_003() { assert_eq!(count("4k3/8/8/8/8/8/8/4K2R w K - 0 1", 6), 764643); }

        #[test]
        #[ignore]
        fn position_004() { assert_eq!(count("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1", 6), 846648); }

        #[test]
        #[ignore]
        fn position_005() { assert_eq!(count("4k2r/8/8/8/8/8/8/4K3 w k - 0 1", 6), 899442); }

        #[test]
        #[ignore]
        fn position_006() { assert_eq!(count("r3k3/8/8/8/8/8/8/4K3 w q - 0 1", 6), 1001523); }

        #[test]
        #[ignore]
        fn position_009() { assert_eq!(count("8/8/8/8/8/8/6k1/4K2R w K - 0 1", 6), 185867); }

        #[test]
        #[ignore]
        fn position_011() { assert_eq!(count("4k2r/6K1/8/8/8/8/8/8 w k - 0 1", 6), 179869); }

        #[test]
        #[ignore]
        fn position_026() { assert_eq!(count("8/8/8/8/8/8/6k1/4K2R b K - 0 1", 6), 179869); }

        #[test]
        #[ignore]
        fn position_028() { assert_eq!(count("4k2r/6K1/8/8/8/8/8/8 b k - 0 1", 6), 185867); }
    }

    mod under_promotion {
        use super::count;

        #[test]
        #[ignore]
        fn position_123() { assert_eq!(count("8/Pk6/8/8/8/8/6Kp/8 b - - 0 1", 6), 1030499); }

        #[test]
        #[ignore]
        fn position_121() { assert_eq!(count("8/PPPk4/8/8/8/8/4Kppp/8 w - - 0 1", 6), 28859283); }
    }

    fn count(fen: &str, depth: usize) -> usize {
        println!("\n{}", fen);
        let pos: Position = fen.parse().unwrap();

        let count = variations::print(&pos, depth);
        println!("Depth {} total:\t{:12}", depth, count);

        count
    }
}
