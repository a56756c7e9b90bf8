#![allow(non_snake_case)]
pub mod global;
use crate::global::DEFAULT_TOLERANCE;
pub mod symbolic;
use crate::symbolic::symbolic_engine::Expr;
pub mod demos;
use crate::demos::graph_walks::DirectedGraph;
use crate::demos::ledger::{Account, TransactionLedger};
use crate::demos::render_backends::{
    RenderBackendType, get_render_factory, render_backend_from_string,
};
use itertools::Itertools;
use log::info;
use simplelog::LevelFilter;
use simplelog::*;
use std::sync::Arc;
use std::thread;

fn main() {
    let loglevel = Some("info".to_string());
    let is_logging_disabled = loglevel
        .as_ref()
        .map(|level| level == "off" || level == "none")
        .unwrap_or(false);

    if is_logging_disabled {
        run_example();
    } else {
        let log_option = if let Some(level) = loglevel {
            match level.as_str() {
                "debug" => LevelFilter::Info,
                "info" => LevelFilter::Info,
                "warn" => LevelFilter::Warn,
                "error" => LevelFilter::Error,
                _ => panic!("loglevel must be debug, info, warn or error"),
            }
        } else {
            LevelFilter::Info
        };
        println!(" \n \n Program started with loglevel: {}", log_option);
        let logger_instance = CombinedLogger::init(vec![TermLogger::new(
            log_option,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )]);

        match logger_instance {
            Ok(()) => {
                run_example();
                info!(" \n \n Program ended");
            }
            Err(_) => {
                run_example();
            }
        }
    }
}

fn run_example() {
    let example = 0;
    match example {
        0 => {
            // FULL WALKTHROUGH: EXPRESSIONS, LEDGER, FACTORIES, GRAPH WALKS
            // symbolic part: f(x) = (x^2 + 3*x)*sin(x), same x handle shared everywhere
            let x = Expr::Var.shared();
            let f = Expr::Mul(
                Expr::Add(
                    Expr::Pow(Arc::clone(&x), Expr::Const(2.0).shared()).shared(),
                    Expr::Mul(Expr::Const(3.0).shared(), Arc::clone(&x)).shared(),
                )
                .shared(),
                Expr::sin(Arc::clone(&x)).shared(),
            );
            let df = f.derivative();
            println!("f = {}", f);
            println!("df = {}", df);
            println!("f(2) = {}", f.evaluate(2.0));
            println!("df(2) = {}", df.evaluate(2.0));

            // ledger part: ten threads against one account, each nets +50
            let account = Account::new("MAIN", 1000.0);
            thread::scope(|s| {
                for _ in 0..10 {
                    s.spawn(|| {
                        let ledger = TransactionLedger::instance();
                        ledger.deposit(&account, 100.0);
                        ledger.withdraw(&account, 50.0);
                    });
                }
            });
            println!("final balance = {}", account.get_balance());
            TransactionLedger::instance().calc_statistics();

            // factory part: draw the same scene with both widget families
            for backend in [RenderBackendType::OpenGL, RenderBackendType::Vulkan] {
                let factory = get_render_factory(backend);
                println!("{}", factory.create_window().draw());
                println!("{}", factory.create_button().draw());
                println!("{}", factory.create_shader().compile());
            }

            // graph part: walk the same graph breadth-first and depth-first
            let mut graph = DirectedGraph::new();
            graph.add_edge(1, 2);
            graph.add_edge(1, 3);
            graph.add_edge(2, 4);
            graph.add_edge(3, 4);
            graph.add_edge(4, 5);
            println!("BFS: {}", graph.bfs(1).join(" -> "));
            println!("DFS: {}", graph.dfs(1).join(" -> "));
        }
        1 => {
            // SYMBOLIC ENGINE ONLY
            // operator syntax, lambdified closure and numerical cross-check
            let f = (Expr::Var.pow(Expr::Const(2.0)) + Expr::Const(3.0) * Expr::Var)
                * Expr::sin(Expr::Var.shared());
            println!("f = {}", f);
            println!("df = {}", f.derivative());
            let f_fn = f.lambdify1D();
            println!("f(1) = {}", f_fn(1.0));
            let (norm, within) = f.compare_num1D(0.0, 2.0, 100, DEFAULT_TOLERANCE);
            println!("norm = {}, within tolerance = {}", norm, within);
        }
        2 => {
            // LEDGER ONLY
            let account = Account::new("SOLO", 200.0);
            let ledger = TransactionLedger::instance();
            ledger.deposit(&account, 50.0);
            // overdraft is refused and leaves no record
            let ok = ledger.withdraw(&account, 1000.0);
            println!("overdraft accepted: {}", ok);
            for t in ledger.log_snapshot() {
                println!(
                    "{}: {} {} on {}",
                    t.stamp.format("%H:%M:%S"),
                    t.kind,
                    t.amount,
                    t.account_id
                );
            }
            ledger.calc_statistics();
        }
        3 => {
            // RENDER BACKEND FACTORIES ONLY
            // the backend is chosen by name, unknown names panic
            let factory = render_backend_from_string("vulkan".to_string());
            println!("{}", factory.create_window().draw());
            println!("{}", factory.create_button().draw());
            println!("{}", factory.create_shader().compile());
        }
        4 => {
            // GRAPH WALKS ONLY
            let mut graph = DirectedGraph::new();
            graph.add_edge(10, 20);
            graph.add_edge(10, 30);
            graph.add_edge(20, 40);
            println!("nodes = {:?}", graph.node_ids());
            println!("BFS from 10: {}", graph.bfs(10).join(" -> "));
            println!("DFS from 10: {}", graph.dfs(10).join(" -> "));
        }
        _ => {
            println!("example not found");
        }
    }
    //_________________________________________________
}
