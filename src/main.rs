//! marketcore - Demo Binary
//!
//! Walks one full market session: mint, list, purchase, relist, and prints
//! the receipts, the event journal and the state root along the way.

use marketcore::engine::payout::CreditLedger;
use marketcore::engine::SettlementEngine;
use marketcore::ledger::Market;
use marketcore::types::amount::format_amount_trimmed;

const OPERATOR: u64 = 1;
const ALICE: u64 = 100;
const BOB: u64 = 200;

fn main() {
    println!("===========================================");
    println!("  marketcore - Registry & Exchange Ledger");
    println!("===========================================");
    println!();

    let mut market = match Market::new(OPERATOR, 250) {
        Ok(market) => market,
        Err(err) => {
            eprintln!("failed to configure market: {}", err);
            return;
        }
    };
    let mut engine = SettlementEngine::new();
    let mut sink = CreditLedger::new();

    println!("Minting an asset for account {}...", ALICE);
    let asset_id = match market.mint(ALICE, "ipfs://QmExampleAssetMetadata", 100) {
        Ok(id) => id,
        Err(err) => {
            eprintln!("mint failed: {}", err);
            return;
        }
    };
    println!("  Asset id: {}", asset_id);
    println!();

    println!("Listing asset {} at 1.5 units...", asset_id);
    let price = 150_000_000; // 1.5 units in base units (10^8 scale)
    if let Err(err) = market.list(asset_id, ALICE, price) {
        eprintln!("list failed: {}", err);
        return;
    }
    println!("  Active listings: {}", market.active_listing_count());
    println!();

    println!("Account {} buys asset {} with exact payment...", BOB, asset_id);
    match engine.purchase(&mut market, asset_id, BOB, price, &mut sink) {
        Ok(receipt) => {
            println!("  Seller share:    {}", format_amount_trimmed(receipt.seller_amount));
            println!("  Creator royalty: {}", format_amount_trimmed(receipt.royalty_fee));
            println!("  Platform fee:    {}", format_amount_trimmed(receipt.marketplace_fee));
            println!("  Receipt digest:  {}", receipt.digest_hex());

            match ssz_rs::serialize(&receipt) {
                Ok(bytes) => println!("  Receipt wire form: {} bytes (SSZ)", bytes.len()),
                Err(e) => println!("  ERROR: failed to serialize receipt: {:?}", e),
            }
        }
        Err(err) => {
            eprintln!("purchase failed: {}", err);
            return;
        }
    }
    println!();

    println!("Ownership after sale:");
    println!("  owner_of({}) = {:?}", asset_id, market.owner_of(asset_id));
    println!("  holdings: alice={} bob={}", market.holdings_of(ALICE), market.holdings_of(BOB));
    println!();

    println!("Event journal:");
    for record in market.events() {
        println!("  [{}] {:?}", record.seq, record.event);
    }
    println!();

    println!("State root: {}", hex::encode(market.compute_state_root()));
}
