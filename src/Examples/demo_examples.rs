// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::demos::graph_walks::DirectedGraph;
use crate::demos::ledger::{Account, TransactionLedger};
use crate::demos::render_backends::{
    RenderBackendType, get_render_factory, render_backend_from_string,
};
use itertools::Itertools;
use std::thread;
#[allow(dead_code)]
pub fn demo_examples(example: usize) {
    match example {
        0 => {
            // THREAD SAFE LEDGER
            // one shared account, ten threads, each deposits 100 and withdraws 50
            let account = Account::new("ACC-1", 1000.0);
            thread::scope(|s| {
                for _ in 0..10 {
                    s.spawn(|| {
                        let ledger = TransactionLedger::instance();
                        ledger.deposit(&account, 100.0);
                        ledger.withdraw(&account, 50.0);
                    });
                }
            });
            println!(
                "final balance of {} = {}",
                account.get_id(),
                account.get_balance()
            );
            // every successful operation left a record in the process-wide ledger
            let ledger = TransactionLedger::instance();
            println!("records in the ledger: {}", ledger.log_len());
            for t in ledger.log_snapshot().iter().take(3) {
                println!(
                    "{}: {} {} on {}",
                    t.stamp.format("%Y-%m-%d %H:%M:%S"),
                    t.kind,
                    t.amount,
                    t.account_id
                );
            }
            // per-kind counters rendered as a table through the logging backend
            ledger.calc_statistics();
            // both handles point to the same instance
            let first = TransactionLedger::instance();
            let second = TransactionLedger::instance();
            println!("same ledger instance: {}", std::ptr::eq(first, second));
        }
        1 => {
            // RENDER BACKEND FACTORIES
            // the concrete widget family is picked at runtime through the factory
            let factory = get_render_factory(RenderBackendType::OpenGL);
            println!("{}", factory.create_window().draw());
            println!("{}", factory.create_button().draw());
            println!("{}", factory.create_shader().compile());
            // swapping the backend swaps the whole family at once
            let factory = get_render_factory(RenderBackendType::Vulkan);
            println!("{}", factory.create_window().draw());
            println!("{}", factory.create_button().draw());
            println!("{}", factory.create_shader().compile());
            // the backend can also be chosen by name, unknown names panic
            let factory = render_backend_from_string("opengl".to_string());
            println!("{}", factory.create_shader().compile());
        }
        2 => {
            // GRAPH WALKS
            // adjacency list keyed by integer node id
            let mut graph = DirectedGraph::new();
            graph.add_edge(1, 2);
            graph.add_edge(1, 3);
            graph.add_edge(2, 4);
            graph.add_edge(3, 4);
            graph.add_edge(4, 5);
            println!("nodes: {:?}", graph.node_ids());
            // both walks are plain iterators, already visited nodes are skipped
            println!("BFS from 1: {}", graph.bfs(1).join(" -> "));
            println!("DFS from 1: {}", graph.dfs(1).join(" -> "));
            // walks can start from any node
            println!("BFS from 2: {}", graph.bfs(2).join(" -> "));
        }
        _ => {
            println!("example not found");
        }
    }
    //_________________________________________________
}
