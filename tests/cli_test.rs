use std::env;

use spoplcli::cli;

#[tokio::test]
async fn test_info_without_flags_skips_token_exchange() {
    // Only test in this binary, nothing else reads the environment
    unsafe { env::remove_var("SPOTIFY_API_REFRESH_TOKEN") };

    // With no refresh token available, any attempt to obtain one would
    // terminate the run. Without flags the command must return with a
    // hint before reaching for a token.
    cli::info(false, false).await;
}
