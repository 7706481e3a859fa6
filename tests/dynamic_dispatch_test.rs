use payfront::domain::card::CardNumber;
use payfront::domain::money::Amount;
use payfront::domain::ports::{CardValidatorBox, GatewayFactory, PaymentProcessorBox};
use payfront::infrastructure::stripe::StripeFactory;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_triplet_as_trait_objects_across_tasks() {
    let factory = StripeFactory::new();
    let validator: CardValidatorBox = factory.create_validator();
    let processor: PaymentProcessorBox = factory.create_processor();

    // Verify Send + Sync by moving the boxed components into a task
    let handle = tokio::spawn(async move {
        let card = CardNumber::new("4242424242424242").unwrap();
        assert!(validator.validate(&card));
        processor
            .process(Amount::new(dec!(5.00)).unwrap(), &card)
            .await
            .unwrap()
    });

    let transaction = handle.await.unwrap();
    assert!(transaction.as_str().starts_with("STRIPE-"));
}
