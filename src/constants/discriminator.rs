// Discriminator Tables
//
// Every instruction payload and account blob opens with a fixed 8-byte
// tag. Instruction tags are opaque byte constants fixed by the deployed
// program; account tags are 8-byte ASCII strings. Both tables are static
// data with total lookups: an unknown key returns None, never a fault.

/// Instruction discriminators, one per program entry point
pub mod instruction {
    pub const INITIALIZE_REGISTRY: [u8; 8] = [189, 181, 20, 17, 174, 57, 249, 59];
    pub const CREATE_POOL: [u8; 8] = [233, 146, 209, 142, 207, 104, 64, 188];
    pub const CREATE_NPOOL: [u8; 8] = [29, 25, 64, 157, 119, 136, 249, 210];
    pub const CLOSE_POOL: [u8; 8] = [140, 189, 209, 23, 239, 62, 239, 11];
    pub const SWAP_T0_T1: [u8; 8] = [223, 186, 76, 166, 19, 133, 192, 102];
    pub const SWAP_T1_T0: [u8; 8] = [219, 197, 77, 169, 154, 220, 148, 150];
    pub const SWAP_EXACT_OUT: [u8; 8] = [250, 73, 101, 33, 38, 207, 75, 184];
    pub const SWAP_N: [u8; 8] = [171, 255, 125, 226, 55, 214, 11, 89];
    pub const ADD_LIQUIDITY: [u8; 8] = [181, 157, 89, 67, 143, 182, 52, 72];
    pub const ADD_LIQUIDITY_SINGLE: [u8; 8] = [247, 21, 240, 145, 37, 101, 229, 181];
    pub const ADD_LIQUIDITY_N: [u8; 8] = [6, 27, 17, 213, 159, 77, 165, 174];
    pub const REMOVE_LIQUIDITY: [u8; 8] = [80, 85, 209, 72, 24, 206, 177, 108];
    pub const REMOVE_LIQUIDITY_SINGLE: [u8; 8] = [216, 47, 132, 215, 169, 108, 188, 17];
    pub const REMOVE_LIQUIDITY_N: [u8; 8] = [150, 30, 242, 114, 210, 109, 87, 214];
    pub const COLLECT_ADMIN_FEES: [u8; 8] = [159, 21, 23, 198, 210, 68, 40, 219];
    pub const SWEEP_FEES: [u8; 8] = [175, 225, 98, 71, 118, 66, 34, 148];
    pub const UPDATE_FEE: [u8; 8] = [232, 253, 195, 247, 148, 212, 73, 222];
    pub const SET_ADMIN_FEE: [u8; 8] = [254, 2, 31, 171, 112, 24, 69, 155];
    pub const SET_PAUSE: [u8; 8] = [63, 32, 154, 2, 56, 103, 79, 45];
    pub const COMMIT_AMP: [u8; 8] = [208, 1, 51, 213, 106, 76, 235, 171];
    pub const RAMP_AMP: [u8; 8] = [13, 197, 68, 251, 53, 108, 155, 10];
    pub const STOP_RAMP: [u8; 8] = [251, 114, 21, 182, 96, 21, 236, 113];
    pub const TRANSFER_AUTHORITY: [u8; 8] = [48, 169, 76, 72, 229, 180, 55, 161];
    pub const ACCEPT_AUTHORITY: [u8; 8] = [107, 86, 198, 91, 33, 12, 107, 160];
    pub const CANCEL_AUTHORITY_TRANSFER: [u8; 8] = [94, 131, 125, 184, 183, 24, 125, 229];
    pub const CREATE_FARM: [u8; 8] = [74, 59, 128, 160, 87, 174, 153, 194];
    pub const FUND_FARM: [u8; 8] = [24, 200, 152, 129, 117, 142, 212, 252];
    pub const CLOSE_FARM: [u8; 8] = [61, 55, 75, 84, 186, 30, 173, 159];
    pub const STAKE: [u8; 8] = [206, 176, 202, 18, 200, 209, 179, 108];
    pub const UNSTAKE: [u8; 8] = [90, 95, 107, 42, 205, 124, 50, 225];
    pub const CLAIM_REWARDS: [u8; 8] = [4, 144, 132, 71, 116, 23, 151, 80];
    pub const LOCK_STAKE: [u8; 8] = [111, 186, 175, 228, 49, 165, 27, 248];
    pub const EXTEND_LOCK: [u8; 8] = [68, 151, 140, 144, 139, 122, 118, 170];
    pub const CREATE_LOTTERY: [u8; 8] = [242, 165, 247, 119, 17, 203, 21, 42];
    pub const ENTER_LOTTERY: [u8; 8] = [252, 72, 239, 78, 58, 56, 149, 231];
    pub const DRAW_LOTTERY: [u8; 8] = [17, 188, 124, 77, 90, 34, 97, 19];
    pub const CLAIM_PRIZE: [u8; 8] = [157, 233, 139, 121, 246, 62, 234, 235];
    pub const CLOSE_LOTTERY: [u8; 8] = [253, 97, 216, 187, 251, 189, 113, 22];
    pub const GOV_PROPOSE: [u8; 8] = [212, 205, 15, 250, 68, 199, 22, 202];
    pub const GOV_VOTE: [u8; 8] = [107, 96, 82, 15, 152, 111, 243, 66];
    pub const GOV_EXECUTE: [u8; 8] = [10, 65, 231, 48, 220, 10, 40, 227];
    pub const GOV_CANCEL: [u8; 8] = [191, 5, 156, 243, 39, 24, 67, 107];
    pub const GET_TWAP: [u8; 8] = [110, 181, 179, 141, 85, 10, 37, 120];
    pub const GET_SPOT_PRICE: [u8; 8] = [206, 196, 86, 131, 23, 179, 89, 150];
    pub const GET_VIRTUAL_PRICE: [u8; 8] = [41, 165, 98, 171, 1, 184, 61, 157];
    pub const RECORD_OBSERVATION: [u8; 8] = [37, 148, 41, 216, 83, 104, 162, 96];
    pub const MIGRATE_POOL: [u8; 8] = [55, 170, 171, 123, 210, 69, 39, 172];
    pub const FLASH_LOAN: [u8; 8] = [239, 246, 59, 224, 139, 20, 175, 14];
    pub const FLASH_REPAY: [u8; 8] = [182, 143, 19, 23, 39, 221, 184, 78];
    pub const CREATE_CL_POOL: [u8; 8] = [81, 31, 181, 194, 195, 144, 123, 254];
    pub const OPEN_CL_POSITION: [u8; 8] = [176, 197, 59, 160, 171, 113, 71, 44];
    pub const CLOSE_CL_POSITION: [u8; 8] = [195, 151, 204, 98, 211, 16, 8, 105];
    pub const COLLECT_CL_FEES: [u8; 8] = [109, 197, 177, 155, 238, 142, 77, 18];
    pub const CREATE_ORDERBOOK: [u8; 8] = [103, 86, 215, 172, 216, 255, 114, 218];
    pub const PLACE_ORDER: [u8; 8] = [51, 194, 155, 175, 109, 130, 96, 106];
    pub const CANCEL_ORDER: [u8; 8] = [95, 129, 237, 240, 8, 49, 223, 132];
    pub const FILL_ORDER: [u8; 8] = [232, 122, 115, 25, 199, 143, 136, 162];
    pub const INIT_ML_BRAIN: [u8; 8] = [173, 119, 125, 231, 127, 39, 192, 209];
    pub const UPDATE_ML_BRAIN: [u8; 8] = [209, 78, 250, 204, 114, 228, 11, 4];
    pub const SET_ORACLE: [u8; 8] = [186, 128, 81, 104, 74, 79, 18, 224];
    pub const TRIP_CIRCUIT_BREAKER: [u8; 8] = [224, 91, 127, 211, 207, 41, 163, 223];
    pub const RESET_CIRCUIT_BREAKER: [u8; 8] = [225, 48, 84, 136, 90, 146, 26, 149];
}

/// Account discriminators, 8-byte ASCII tags at offset 0 of every blob
pub mod account {
    pub const POOL: [u8; 8] = *b"POOLSWAP";
    pub const NPOOL: [u8; 8] = *b"NPOOLSWA";
    pub const FARM: [u8; 8] = *b"FARMSWAP";
    pub const USER_FARM: [u8; 8] = *b"UFARMSWA";
    pub const LOTTERY: [u8; 8] = *b"LOTTERY!";
    pub const LOTTERY_ENTRY: [u8; 8] = *b"LOTENTRY";
    pub const REGISTRY: [u8; 8] = *b"REGISTRY";
}

/// Symbolic instruction name -> discriminator, in program declaration order
pub static INSTRUCTION_TABLE: &[(&str, [u8; 8])] = &[
    ("initialize_registry", instruction::INITIALIZE_REGISTRY),
    ("create_pool", instruction::CREATE_POOL),
    ("create_npool", instruction::CREATE_NPOOL),
    ("close_pool", instruction::CLOSE_POOL),
    ("swap_t0_t1", instruction::SWAP_T0_T1),
    ("swap_t1_t0", instruction::SWAP_T1_T0),
    ("swap_exact_out", instruction::SWAP_EXACT_OUT),
    ("swap_n", instruction::SWAP_N),
    ("add_liquidity", instruction::ADD_LIQUIDITY),
    ("add_liquidity_single", instruction::ADD_LIQUIDITY_SINGLE),
    ("add_liquidity_n", instruction::ADD_LIQUIDITY_N),
    ("remove_liquidity", instruction::REMOVE_LIQUIDITY),
    ("remove_liquidity_single", instruction::REMOVE_LIQUIDITY_SINGLE),
    ("remove_liquidity_n", instruction::REMOVE_LIQUIDITY_N),
    ("collect_admin_fees", instruction::COLLECT_ADMIN_FEES),
    ("sweep_fees", instruction::SWEEP_FEES),
    ("update_fee", instruction::UPDATE_FEE),
    ("set_admin_fee", instruction::SET_ADMIN_FEE),
    ("set_pause", instruction::SET_PAUSE),
    ("commit_amp", instruction::COMMIT_AMP),
    ("ramp_amp", instruction::RAMP_AMP),
    ("stop_ramp", instruction::STOP_RAMP),
    ("transfer_authority", instruction::TRANSFER_AUTHORITY),
    ("accept_authority", instruction::ACCEPT_AUTHORITY),
    ("cancel_authority_transfer", instruction::CANCEL_AUTHORITY_TRANSFER),
    ("create_farm", instruction::CREATE_FARM),
    ("fund_farm", instruction::FUND_FARM),
    ("close_farm", instruction::CLOSE_FARM),
    ("stake", instruction::STAKE),
    ("unstake", instruction::UNSTAKE),
    ("claim_rewards", instruction::CLAIM_REWARDS),
    ("lock_stake", instruction::LOCK_STAKE),
    ("extend_lock", instruction::EXTEND_LOCK),
    ("create_lottery", instruction::CREATE_LOTTERY),
    ("enter_lottery", instruction::ENTER_LOTTERY),
    ("draw_lottery", instruction::DRAW_LOTTERY),
    ("claim_prize", instruction::CLAIM_PRIZE),
    ("close_lottery", instruction::CLOSE_LOTTERY),
    ("gov_propose", instruction::GOV_PROPOSE),
    ("gov_vote", instruction::GOV_VOTE),
    ("gov_execute", instruction::GOV_EXECUTE),
    ("gov_cancel", instruction::GOV_CANCEL),
    ("get_twap", instruction::GET_TWAP),
    ("get_spot_price", instruction::GET_SPOT_PRICE),
    ("get_virtual_price", instruction::GET_VIRTUAL_PRICE),
    ("record_observation", instruction::RECORD_OBSERVATION),
    ("migrate_pool", instruction::MIGRATE_POOL),
    ("flash_loan", instruction::FLASH_LOAN),
    ("flash_repay", instruction::FLASH_REPAY),
    ("create_cl_pool", instruction::CREATE_CL_POOL),
    ("open_cl_position", instruction::OPEN_CL_POSITION),
    ("close_cl_position", instruction::CLOSE_CL_POSITION),
    ("collect_cl_fees", instruction::COLLECT_CL_FEES),
    ("create_orderbook", instruction::CREATE_ORDERBOOK),
    ("place_order", instruction::PLACE_ORDER),
    ("cancel_order", instruction::CANCEL_ORDER),
    ("fill_order", instruction::FILL_ORDER),
    ("init_ml_brain", instruction::INIT_ML_BRAIN),
    ("update_ml_brain", instruction::UPDATE_ML_BRAIN),
    ("set_oracle", instruction::SET_ORACLE),
    ("trip_circuit_breaker", instruction::TRIP_CIRCUIT_BREAKER),
    ("reset_circuit_breaker", instruction::RESET_CIRCUIT_BREAKER),
];

/// Account tag name -> discriminator
pub static ACCOUNT_TABLE: &[(&str, [u8; 8])] = &[
    ("pool", account::POOL),
    ("npool", account::NPOOL),
    ("farm", account::FARM),
    ("user_farm", account::USER_FARM),
    ("lottery", account::LOTTERY),
    ("lottery_entry", account::LOTTERY_ENTRY),
    ("registry", account::REGISTRY),
];

/// Look up an instruction discriminator by its symbolic name
pub fn instruction_discriminator(name: &str) -> Option<[u8; 8]> {
    INSTRUCTION_TABLE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, d)| *d)
}

/// Reverse lookup: discriminator bytes -> symbolic instruction name
pub fn instruction_name(disc: &[u8; 8]) -> Option<&'static str> {
    INSTRUCTION_TABLE
        .iter()
        .find(|(_, d)| d == disc)
        .map(|(n, _)| *n)
}

/// Look up an account discriminator by its tag name
pub fn account_discriminator(name: &str) -> Option<[u8; 8]> {
    ACCOUNT_TABLE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, d)| *d)
}

/// Reverse lookup: discriminator bytes -> account tag name
pub fn account_name(disc: &[u8; 8]) -> Option<&'static str> {
    ACCOUNT_TABLE
        .iter()
        .find(|(_, d)| d == disc)
        .map(|(n, _)| *n)
}
